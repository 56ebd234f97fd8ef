use std::env;

use anyhow::{Context, Result};

use crate::email::DEFAULT_RESEND_API_URL;

pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub host: String,
  pub port: u16,
  pub resend_api_url: String,
  /// Service-level key. Callers always supply their own, so the send path never reads this.
  pub resend_api_key: Option<String>,
  pub max_body_bytes: usize,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      host: "0.0.0.0".to_string(),
      port: 8000,
      resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
      resend_api_key: None,
      max_body_bytes: DEFAULT_MAX_BODY_BYTES,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let defaults = AppConfig::default();

    let port = match env::var("PORT") {
      Ok(port) => port.parse().with_context(|| format!("PORT must be a number, got {:?}", port))?,
      Err(_) => defaults.port,
    };

    let max_body_bytes = match env::var("MAX_BODY_BYTES") {
      Ok(limit) => limit
        .parse()
        .with_context(|| format!("MAX_BODY_BYTES must be a number, got {:?}", limit))?,
      Err(_) => defaults.max_body_bytes,
    };

    Ok(AppConfig {
      host: env::var("HOST").unwrap_or(defaults.host),
      port,
      resend_api_url: env::var("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
      resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
      max_body_bytes,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
