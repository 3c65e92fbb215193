//! HTTP client for the generation endpoint.

use crate::generation::config::GenerationConfig;
use crate::reply::{ReplyPayload, ReplyRequest};
use crate::{RedraftError, Result};
use tracing::debug;

/// Thin wrapper around a reqwest client bound to one endpoint URL.
pub struct EndpointClient {
    config: GenerationConfig,
    http: reqwest::Client,
}

impl EndpointClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Post one reply request and decode the response body.
    ///
    /// Runs to completion or failure exactly once. No retries and no client
    /// timeout; the caller owns how long it is willing to wait.
    pub async fn generate(&self, request: &ReplyRequest) -> Result<String> {
        debug!(endpoint = %self.config.endpoint, "Sending generation request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedraftError::EndpointError(format!(
                "endpoint returned {}",
                status
            )));
        }

        let body = response.text().await?;
        Ok(ReplyPayload::from_body(&body).into_text())
    }
}
