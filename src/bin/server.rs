//! Redraft reply server
//!
//! Standalone binary exposing the generation endpoint consumed by the
//! desktop UI.

use anyhow::Result;
use redraft::server::{ReplyServer, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redraft=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Redraft reply server");

    let config = ServerConfig::from_env()?;
    ReplyServer::new(config).start().await
}
