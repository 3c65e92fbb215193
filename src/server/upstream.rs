//! Upstream model API client
//!
//! Builds the prompt for an incoming reply request, posts it to a
//! Gemini-style `generateContent` endpoint, and extracts the generated text
//! from the response document.

use crate::reply::ReplyRequest;
use crate::server::ServerConfig;
use crate::{RedraftError, Result};
use serde_json::{json, Value};
use tracing::{debug, error};

/// Shown when the upstream document carries no candidate text.
const NO_CONTENT_MESSAGE: &str = "⚠️ No content received from the model.";

/// Client for the upstream text-generation API
pub struct ReplyGenerator {
    http: reqwest::Client,
    upstream_base: String,
    model: String,
    api_key: String,
}

impl ReplyGenerator {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream_base: config.upstream_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Generate a reply, mapping every failure to readable text
    ///
    /// The route contract is plain text with a 200 status; callers display
    /// whatever comes back, so errors are folded into the body.
    pub async fn generate(&self, request: &ReplyRequest) -> String {
        match self.call_upstream(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Upstream generation failed: {}", e);
                format!("❌ Error calling the model API: {}", e)
            }
        }
    }

    async fn call_upstream(&self, request: &ReplyRequest) -> Result<String> {
        let prompt = build_prompt(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.upstream_base, self.model, self.api_key
        );

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        debug!(model = %self.model, "Calling upstream model API");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| RedraftError::UpstreamError(e.to_string()))?;

        let document: Value = response
            .json()
            .await
            .map_err(|e| RedraftError::DecodeError(e.to_string()))?;

        Ok(extract_reply_text(&document))
    }
}

/// Build the prompt sent to the model
///
/// Tone is optional; when present it becomes its own line between the
/// instruction and the quoted email.
pub fn build_prompt(request: &ReplyRequest) -> String {
    let mut prompt = String::from("Generate a professional email reply.\n");
    if !request.tone.is_empty() {
        prompt.push_str("Tone: ");
        prompt.push_str(&request.tone);
        prompt.push('\n');
    }
    prompt.push_str("Original Email:\n");
    prompt.push_str(&request.email_content);
    prompt
}

/// Pull the first candidate's text out of a generateContent response
pub fn extract_reply_text(document: &Value) -> String {
    document
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| NO_CONTENT_MESSAGE.to_string())
}
