use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub ok: bool,
  pub service: String,
}
