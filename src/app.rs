use axum::{
  extract::{DefaultBodyLimit, State},
  middleware,
  response::Json as JsonResponse,
  routing::get,
  Router,
};
use tower_http::trace::TraceLayer;

use crate::{
  config::DEFAULT_MAX_BODY_BYTES,
  domains::mail::rest::mail_routes,
  models::HealthResponse,
  middleware::cors::cors_middleware,
  state::{AppState, SharedAppState},
  AppError,
};

pub fn create_app(state: SharedAppState) -> Router {
  create_app_with_body_limit(state, DEFAULT_MAX_BODY_BYTES)
}

pub fn create_app_with_body_limit(state: SharedAppState, max_body_bytes: usize) -> Router {
  Router::new()
    .route("/health", get(health_handler).fallback(not_found_handler))
    .nest("/api", mail_routes())
    .fallback(not_found_handler)
    .with_state(state)
    .layer(DefaultBodyLimit::max(max_body_bytes))
    .layer(middleware::from_fn(cors_middleware))
    .layer(TraceLayer::new_for_http())
}

pub async fn health_handler(State(state): State<SharedAppState>) -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse {
    ok: true,
    service: state.service_name().to_string(),
  })
}

pub async fn not_found_handler() -> AppError {
  AppError::route_not_found()
}
