use async_trait::async_trait;
use reqwest::Client;

use crate::email::types::{OutboundEmail, ProviderError, ProviderErrorBody, SendReceipt};

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Anything that can deliver an [`OutboundEmail`] on behalf of the holder of `api_key`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<SendReceipt, ProviderError>;
}

/// Resend HTTP API client. Holds no credentials; the key is supplied per call.
#[derive(Clone)]
pub struct ResendClient {
  base_url: String,
  client: Client,
}

impl ResendClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      base_url,
      client: Client::new(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn emails_url(&self) -> String {
    format!("{}/emails", self.base_url)
  }
}

impl Default for ResendClient {
  fn default() -> Self {
    Self::new(DEFAULT_RESEND_API_URL)
  }
}

#[async_trait]
impl EmailProvider for ResendClient {
  async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<SendReceipt, ProviderError> {
    tracing::debug!(subject = %email.subject, recipients = email.to.count(), "Sending email via Resend");

    let response = self
      .client
      .post(self.emails_url())
      .bearer_auth(api_key)
      .json(email)
      .send()
      .await
      .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
      .bytes()
      .await
      .map_err(|e| ProviderError::Transport(format!("Failed to read response body: {}", e)))?;

    if status.is_success() {
      // An unparseable success body still means the provider accepted the email.
      return Ok(serde_json::from_slice(&body).unwrap_or_default());
    }

    let message = serde_json::from_slice::<ProviderErrorBody>(&body)
      .ok()
      .and_then(|b| b.message)
      .filter(|m| !m.is_empty());

    Err(ProviderError::Rejected {
      status: status.as_u16(),
      message,
    })
  }
}
