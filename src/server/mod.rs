//! Reply generation server
//!
//! HTTP endpoint consumed by the desktop UI. Exposes the generate route and
//! a liveness ping, and forwards prompts to an upstream model API.

pub mod routes;
pub mod upstream;

use crate::server::routes::{generate_reply, ping};
use crate::server::upstream::ReplyGenerator;
use crate::{RedraftError, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Base URL of the upstream model API
    pub upstream_base: String,
    /// Upstream model name
    pub model: String,
    /// Upstream API key
    pub api_key: String,
}

impl ServerConfig {
    /// Read the configuration from the environment
    ///
    /// `GEMINI_API_KEY` is required; the port and upstream default to the
    /// values the desktop client expects.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| RedraftError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

        Ok(Self {
            port: 8080,
            upstream_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_key,
        })
    }

    /// Override the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the upstream base URL
    pub fn with_upstream_base(mut self, upstream_base: impl Into<String>) -> Self {
        self.upstream_base = upstream_base.into();
        self
    }
}

/// Reply generation API server
pub struct ReplyServer {
    config: ServerConfig,
    generator: Arc<ReplyGenerator>,
}

impl ReplyServer {
    pub fn new(config: ServerConfig) -> Self {
        let generator = Arc::new(ReplyGenerator::new(&config));
        Self { config, generator }
    }

    /// Build the application router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/email/generate", post(generate_reply))
            .route("/api/email/ping", get(ping))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.generator.clone())
    }

    /// Start the server and serve until shutdown
    pub async fn start(&self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let app = self.router();

        info!("Redraft reply server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start reply server: {}", e))?;

        Ok(())
    }
}
