//! Outbound email delivery
//!
//! The service does not send mail itself. It hands a normalized payload to a
//! transactional email provider over HTTP using the caller's own API key.

mod service;
mod types;

#[cfg(test)]
pub use service::MockEmailProvider;
pub use service::{EmailProvider, ResendClient, DEFAULT_RESEND_API_URL};
pub use types::{Attachment, OutboundEmail, ProviderError, Recipients, SendReceipt};
