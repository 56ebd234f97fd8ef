use serde_json::Value;
use validator::ValidationError;

use crate::utils::is_valid_email;

pub const MSG_API_KEY_REQUIRED: &str = "apiKey is required";
pub const MSG_INVALID_SENDER: &str = "invalid sender email";
pub const MSG_TO_REQUIRED: &str = "to is required";
pub const MSG_SUBJECT_REQUIRED: &str = "subject is required";
pub const MSG_CONTENT_REQUIRED: &str = "either text or html content is required";

/// Checks a raw `/api/send` payload. Rules run in order and the first failure wins.
pub fn validate_send_request(body: &Value) -> Result<(), ValidationError> {
  let field = |name: &str| body.get(name).filter(|v| is_truthy(v));

  if !matches!(field("apiKey"), Some(Value::String(_))) {
    return Err(invalid("apiKey", MSG_API_KEY_REQUIRED.to_string()));
  }

  match field("from") {
    Some(Value::String(from)) if is_valid_email(from) => {}
    _ => return Err(invalid("from", MSG_INVALID_SENDER.to_string())),
  }

  let to = field("to").ok_or_else(|| invalid("to", MSG_TO_REQUIRED.to_string()))?;
  let recipients = match to {
    Value::Array(list) => list.iter().collect::<Vec<_>>(),
    single => vec![single],
  };
  for recipient in recipients {
    let valid = recipient.as_str().is_some_and(is_valid_email);
    if !valid {
      return Err(invalid(
        "to",
        format!("invalid recipient email: {}", display_value(recipient)),
      ));
    }
  }

  if !matches!(field("subject"), Some(Value::String(_))) {
    return Err(invalid("subject", MSG_SUBJECT_REQUIRED.to_string()));
  }

  if field("text").is_none() && field("html").is_none() {
    return Err(invalid("content", MSG_CONTENT_REQUIRED.to_string()));
  }

  Ok(())
}

fn invalid(code: &'static str, message: String) -> ValidationError {
  ValidationError::new(code).with_message(message.into())
}

/// `null`, `false`, `0` and `""` count as missing.
pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

fn display_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
