use std::sync::Arc;

use crate::{
  domains::mail::service::{MailService, MailServiceImpl, SendServiceError},
  email::{EmailProvider, SendReceipt},
};

pub const SERVICE_NAME: &str = "resend-online";

pub trait AppState: Clone + Send + Sync + 'static {
  fn service_name(&self) -> &str;
  fn send_email(
    &self,
    body: &[u8],
  ) -> impl std::future::Future<Output = Result<SendReceipt, SendServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mail_service: Arc<MailServiceImpl>,
}

impl SharedAppState {
  pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
    let mail_service = Arc::new(MailServiceImpl::new(provider));

    Self { mail_service }
  }
}

impl AppState for SharedAppState {
  fn service_name(&self) -> &str {
    SERVICE_NAME
  }

  async fn send_email(&self, body: &[u8]) -> Result<SendReceipt, SendServiceError> {
    self.mail_service.send(body).await
  }
}
