use std::{error::Error, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use super::{
  model::SendRequest,
  validation::{is_truthy, validate_send_request},
};
use crate::email::{EmailProvider, ProviderError, SendReceipt};

pub const MSG_SEND_FAILED: &str = "failed to send email";
pub const MSG_INTERNAL_ERROR: &str = "internal server error";

const OPTIONAL_FIELDS: [&str; 5] = ["cc", "bcc", "text", "html", "attachments"];

#[derive(Debug)]
pub enum SendServiceError {
  ValidationError(String),
  ProviderError(String),
  InternalServerError(String),
}

impl Error for SendServiceError {}

impl std::fmt::Display for SendServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SendServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      SendServiceError::ProviderError(msg) => write!(f, "Provider Error: {}", msg),
      SendServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl SendServiceError {
  /// Text placed in the envelope's `error` field.
  pub fn message(&self) -> &str {
    match self {
      SendServiceError::ValidationError(msg)
      | SendServiceError::ProviderError(msg)
      | SendServiceError::InternalServerError(msg) => msg,
    }
  }
}

impl From<ProviderError> for SendServiceError {
  fn from(err: ProviderError) -> Self {
    match err {
      ProviderError::Rejected { message, .. } => {
        SendServiceError::ProviderError(message.unwrap_or_else(|| MSG_SEND_FAILED.to_string()))
      }
      ProviderError::Transport(msg) if msg.is_empty() => {
        SendServiceError::InternalServerError(MSG_INTERNAL_ERROR.to_string())
      }
      ProviderError::Transport(msg) => SendServiceError::InternalServerError(msg),
    }
  }
}

impl From<serde_json::Error> for SendServiceError {
  fn from(err: serde_json::Error) -> Self {
    SendServiceError::InternalServerError(err.to_string())
  }
}

#[async_trait]
pub trait MailService: Send + Sync {
  async fn send(&self, body: &[u8]) -> Result<SendReceipt, SendServiceError>;
}

pub struct MailServiceImpl {
  provider: Arc<dyn EmailProvider>,
}

impl MailServiceImpl {
  pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
    Self { provider }
  }
}

#[async_trait]
impl MailService for MailServiceImpl {
  async fn send(&self, body: &[u8]) -> Result<SendReceipt, SendServiceError> {
    let mut raw: Value = serde_json::from_slice(body)?;

    validate_send_request(&raw).map_err(|e| {
      SendServiceError::ValidationError(e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
    })?;

    drop_absent_optionals(&mut raw);
    let request: SendRequest = serde_json::from_value(raw)?;
    let email = request.to_outbound();

    match self.provider.send(&request.api_key, &email).await {
      Ok(receipt) => {
        tracing::info!(
          id = receipt.id.as_deref().unwrap_or("-"),
          recipients = email.to.count(),
          "Email sent"
        );
        Ok(receipt)
      }
      Err(e) => {
        tracing::error!("Provider error: {}", e);
        Err(e.into())
      }
    }
  }
}

/// Falsy optional fields (`false`, `0`, `""`, `null`) are treated as never sent.
fn drop_absent_optionals(body: &mut Value) {
  if let Some(fields) = body.as_object_mut() {
    fields.retain(|name, value| !OPTIONAL_FIELDS.contains(&name.as_str()) || is_truthy(value));
  }
}
