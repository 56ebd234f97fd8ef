use serde::{Deserialize, Serialize};

/// A single address or a list of addresses, passed through to the provider in the shape the caller used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
  One(String),
  Many(Vec<String>),
}

impl Recipients {
  pub fn count(&self) -> usize {
    match self {
      Recipients::One(_) => 1,
      Recipients::Many(list) => list.len(),
    }
  }

  /// `""` is treated as absent, matching how optional fields are forwarded.
  pub fn is_present(&self) -> bool {
    !matches!(self, Recipients::One(s) if s.is_empty())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
  pub filename: String,
  /// Base64 encoded file content.
  pub content: String,
}

/// Payload sent to the provider's `/emails` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: Recipients,
  pub subject: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cc: Option<Recipients>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bcc: Option<Recipients>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SendReceipt {
  pub id: Option<String>,
}

/// Error body returned by the provider API on a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProviderErrorBody {
  pub message: Option<String>,
}

#[derive(Debug)]
pub enum ProviderError {
  /// The provider answered and refused the send.
  Rejected { status: u16, message: Option<String> },
  /// The request never produced a usable response.
  Transport(String),
}

impl std::error::Error for ProviderError {}

impl std::fmt::Display for ProviderError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ProviderError::Rejected {
        status,
        message: Some(msg),
      } => write!(f, "Provider rejected send ({}): {}", status, msg),
      ProviderError::Rejected { status, message: None } => write!(f, "Provider rejected send ({})", status),
      ProviderError::Transport(msg) => write!(f, "Provider request failed: {}", msg),
    }
  }
}
