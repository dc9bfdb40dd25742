use std::sync::Arc;

use anyhow::Result;
use bridge_core::MemoryStore;
use bridge_web::handlers::AppState;
use bridge_web::{Settings, routes};
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,bridge_web=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = Settings::parse();

  let store = Arc::new(MemoryStore::new());
  let state = AppState {
    subscriptions: store,
    settings: settings.clone(),
  };

  let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
  info!(addr = %settings.bind_addr, "bridge service listening");
  axum::serve(listener, routes::create_router(state)).await?;

  Ok(())
}
