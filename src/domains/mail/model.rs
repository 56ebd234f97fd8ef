use serde::{Deserialize, Serialize};

use crate::email::{Attachment, OutboundEmail, Recipients};

pub const MSG_SENT: &str = "email sent successfully";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
  pub api_key: String,
  pub from: String,
  pub to: Recipients,
  #[serde(default)]
  pub cc: Option<Recipients>,
  #[serde(default)]
  pub bcc: Option<Recipients>,
  pub subject: String,
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default)]
  pub html: Option<String>,
  #[serde(default)]
  pub attachments: Option<Vec<AttachmentRequest>>,
}

/// Attachment as submitted by the caller. Unknown fields are dropped when forwarding.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentRequest {
  pub filename: String,
  pub content: String,
}

impl SendRequest {
  /// Builds the provider payload, forwarding optional fields only when they carry a value.
  pub fn to_outbound(&self) -> OutboundEmail {
    let non_empty = |s: &Option<String>| s.as_ref().filter(|s| !s.is_empty()).cloned();

    OutboundEmail {
      from: self.from.clone(),
      to: self.to.clone(),
      subject: self.subject.clone(),
      cc: self.cc.clone().filter(Recipients::is_present),
      bcc: self.bcc.clone().filter(Recipients::is_present),
      text: non_empty(&self.text),
      html: non_empty(&self.html),
      attachments: self
        .attachments
        .as_ref()
        .filter(|list| !list.is_empty())
        .map(|list| {
          list
            .iter()
            .map(|a| Attachment {
              filename: a.filename.clone(),
              content: a.content.clone(),
            })
            .collect()
        }),
    }
  }
}

/// Uniform response envelope for the send route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendResponse {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl SendResponse {
  pub fn sent(id: Option<String>) -> Self {
    Self {
      success: true,
      id,
      message: Some(MSG_SENT.to_string()),
      error: None,
    }
  }

  pub fn failed(error: impl Into<String>) -> Self {
    Self {
      success: false,
      id: None,
      message: None,
      error: Some(error.into()),
    }
  }
}
