use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use resend_online::app::create_app_with_body_limit;
use resend_online::config::AppConfig;
use resend_online::email::ResendClient;
use resend_online::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resend_online=info,tower_http=info")),
    )
    .init();

  let config = AppConfig::from_env()?;

  if config.resend_api_key.is_some() {
    tracing::info!("RESEND_API_KEY is set but unused; every send uses the caller's apiKey");
  }

  let provider = ResendClient::new(config.resend_api_url.clone());
  tracing::info!("Forwarding sends to {}", provider.base_url());

  let app_state = SharedAppState::new(Arc::new(provider));
  let app = create_app_with_body_limit(app_state, config.max_body_bytes);

  let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

  tracing::info!("Server running on http://{}", listener.local_addr()?);

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
