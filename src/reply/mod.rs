//! Request and response types shared by the UI client and the reply server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional stylistic hint passed through to the generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Friendly,
    Professional,
    Apologetic,
    Enthusiastic,
}

impl Tone {
    /// All selectable tones, in the order they appear in the tone picker.
    pub const ALL: [Tone; 5] = [
        Tone::Formal,
        Tone::Friendly,
        Tone::Professional,
        Tone::Apologetic,
        Tone::Enthusiastic,
    ];

    /// Wire name, also used when building the upstream prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Apologetic => "apologetic",
            Tone::Enthusiastic => "enthusiastic",
        }
    }

    /// Human-readable label for the tone picker.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Apologetic => "Apologetic",
            Tone::Enthusiastic => "Enthusiastic",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/email/generate`.
///
/// The tone field is always present on the wire; an unset selection is sent
/// as the empty string, matching what the endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub email_content: String,
    #[serde(default)]
    pub tone: String,
}

impl ReplyRequest {
    pub fn new(email_content: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            email_content: email_content.into(),
            tone: tone.map(|t| t.as_str().to_string()).unwrap_or_default(),
        }
    }

    pub fn tone(&self) -> Option<Tone> {
        serde_json::from_value(Value::String(self.tone.clone())).ok()
    }
}

/// Decoded shape of a generation response body.
///
/// The endpoint is loosely specified: it may answer with a bare JSON string,
/// an object carrying a `reply` field, any other JSON document, or plain
/// text that is not JSON at all. Each shape is decoded explicitly instead of
/// probed at the call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPayload {
    /// A bare JSON string, or a body that is not valid JSON.
    Text(String),
    /// A JSON object with a string `reply` field.
    Structured(String),
    /// Any other JSON document, kept in its serialized form.
    Raw(String),
}

impl ReplyPayload {
    /// Decode a raw response body into one of the three known shapes.
    pub fn from_body(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return ReplyPayload::Text(body.to_string()),
        };

        match value {
            Value::String(text) => ReplyPayload::Text(text),
            Value::Object(ref map) => match map.get("reply").and_then(Value::as_str) {
                Some(reply) => ReplyPayload::Structured(reply.to_string()),
                None => ReplyPayload::Raw(value.to_string()),
            },
            other => ReplyPayload::Raw(other.to_string()),
        }
    }

    /// The reply text to display, regardless of shape.
    pub fn into_text(self) -> String {
        match self {
            ReplyPayload::Text(text) => text,
            ReplyPayload::Structured(text) => text,
            ReplyPayload::Raw(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_serializes_to_lowercase_name() {
        let json = serde_json::to_string(&Tone::Apologetic).unwrap();
        assert_eq!(json, "\"apologetic\"");
    }

    #[test]
    fn request_uses_camel_case_and_empty_tone_when_unset() {
        let request = ReplyRequest::new("Hello there", None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["emailContent"], "Hello there");
        assert_eq!(json["tone"], "");
    }

    #[test]
    fn request_carries_selected_tone() {
        let request = ReplyRequest::new("Hello there", Some(Tone::Friendly));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tone"], "friendly");
        assert_eq!(request.tone(), Some(Tone::Friendly));
    }

    #[test]
    fn payload_decodes_bare_json_string() {
        let payload = ReplyPayload::from_body("\"Thanks for reaching out!\"");
        assert_eq!(payload, ReplyPayload::Text("Thanks for reaching out!".to_string()));
        assert_eq!(payload.into_text(), "Thanks for reaching out!");
    }

    #[test]
    fn payload_decodes_object_with_reply_field() {
        let payload = ReplyPayload::from_body(r#"{"reply": "See you then."}"#);
        assert_eq!(payload.into_text(), "See you then.");
    }

    #[test]
    fn payload_serializes_object_without_reply_field() {
        let payload = ReplyPayload::from_body(r#"{"status": "ok"}"#);
        assert_eq!(payload, ReplyPayload::Raw(r#"{"status":"ok"}"#.to_string()));
    }

    #[test]
    fn payload_keeps_non_json_body_verbatim() {
        let payload = ReplyPayload::from_body("Dear customer, thank you.");
        assert_eq!(payload.into_text(), "Dear customer, thank you.");
    }

    #[test]
    fn payload_with_non_string_reply_falls_back_to_raw() {
        let payload = ReplyPayload::from_body(r#"{"reply": 42}"#);
        assert_eq!(payload, ReplyPayload::Raw(r#"{"reply":42}"#.to_string()));
    }
}
