//! Request handlers for the reply server

use crate::reply::ReplyRequest;
use crate::server::upstream::ReplyGenerator;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Liveness check
pub async fn ping() -> &'static str {
    "✅ Redraft API running fine!"
}

/// Generate a reply for the posted email
///
/// Always answers 200 with a plain text body; upstream failures come back as
/// human-readable text the client shows verbatim.
pub async fn generate_reply(
    State(generator): State<Arc<ReplyGenerator>>,
    Json(request): Json<ReplyRequest>,
) -> String {
    debug!(
        tone = %request.tone,
        chars = request.email_content.len(),
        "Handling generate request"
    );
    generator.generate(&request).await
}
