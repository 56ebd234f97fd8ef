use axum::{
  body::Bytes,
  extract::{rejection::BytesRejection, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{model::SendResponse, service::SendServiceError};
use crate::{
  app::not_found_handler,
  state::{AppState, SharedAppState},
};

fn map_send_service_error(e: SendServiceError) -> (StatusCode, JsonResponse<SendResponse>) {
  let status = match e {
    SendServiceError::ValidationError(_) | SendServiceError::ProviderError(_) => StatusCode::BAD_REQUEST,
    SendServiceError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
  };
  (status, JsonResponse(SendResponse::failed(e.message())))
}

fn map_body_rejection(rejection: BytesRejection) -> (StatusCode, JsonResponse<SendResponse>) {
  tracing::warn!("Rejected request body: {}", rejection.body_text());
  (rejection.status(), JsonResponse(SendResponse::failed(rejection.body_text())))
}

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/send", post(send_email_handler).fallback(not_found_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<SendResponse>, (StatusCode, JsonResponse<SendResponse>)> {
  let body = body.map_err(map_body_rejection)?;

  state
    .send_email(&body)
    .await
    .map(|receipt| JsonResponse(SendResponse::sent(receipt.id)))
    .map_err(map_send_service_error)
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::super::{model::MSG_SENT, service::MSG_SEND_FAILED};
  use crate::app::create_app_with_body_limit;
  use crate::email::{MockEmailProvider, ProviderError, SendReceipt};
  use crate::state::SharedAppState;
  use crate::test_support::{app_with_provider, get, post_raw};
  use axum::http::StatusCode;
  use serde_json::{json, Value};

  fn minimal() -> Value {
    json!({ "apiKey": "k", "from": "a@b.com", "to": "c@d.com", "subject": "s", "text": "hi" })
  }

  #[tokio::test]
  async fn send_returns_provider_id() {
    let mut provider = MockEmailProvider::new();
    provider.expect_send().times(1).returning(|_, _| {
      Ok(SendReceipt {
        id: Some("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".to_string()),
      })
    });

    let app = app_with_provider(provider);
    let (status, body) = post_raw(app, "/api/send", &serde_json::to_vec(&minimal()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(
      body,
      json!({ "success": true, "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794", "message": MSG_SENT })
    );
  }

  #[tokio::test]
  async fn send_validation_failure_is_bad_request() {
    let mut provider = MockEmailProvider::new();
    provider.expect_send().times(0);

    let app = app_with_provider(provider);
    let mut payload = minimal();
    payload.as_object_mut().unwrap().remove("apiKey");
    let (status, body) = post_raw(app, "/api/send", &serde_json::to_vec(&payload).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("apiKey"));
  }

  #[tokio::test]
  async fn send_provider_rejection_is_bad_request() {
    let mut provider = MockEmailProvider::new();
    provider.expect_send().times(1).returning(|_, _| {
      Err(ProviderError::Rejected {
        status: 429,
        message: None,
      })
    });

    let app = app_with_provider(provider);
    let (status, body) = post_raw(app, "/api/send", &serde_json::to_vec(&minimal()).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "success": false, "error": MSG_SEND_FAILED }));
  }

  #[tokio::test]
  async fn send_provider_failure_is_internal_error() {
    let mut provider = MockEmailProvider::new();
    provider
      .expect_send()
      .times(1)
      .returning(|_, _| Err(ProviderError::Transport("dns error".to_string())));

    let app = app_with_provider(provider);
    let (status, body) = post_raw(app, "/api/send", &serde_json::to_vec(&minimal()).unwrap()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("dns error"));
  }

  #[tokio::test]
  async fn send_malformed_json_is_internal_error() {
    let app = app_with_provider(MockEmailProvider::new());
    let (status, body) = post_raw(app, "/api/send", b"{\"apiKey\":").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn get_on_send_route_is_not_found() {
    let app = app_with_provider(MockEmailProvider::new());
    let (status, body) = get(app, "/api/send").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn oversized_body_is_json_envelope() {
    let mut provider = MockEmailProvider::new();
    provider.expect_send().times(0);

    let app = create_app_with_body_limit(SharedAppState::new(Arc::new(provider)), 16);
    let (status, body) = post_raw(app, "/api/send", &serde_json::to_vec(&minimal()).unwrap()).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("length limit exceeded"));
  }
}
