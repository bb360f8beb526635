// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// `None` when the field is missing or is not a JSON string.
    #[serde(default, deserialize_with = "text_only", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            message: "Backend is running!".to_string(),
            status: "healthy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_must_be_text() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.message.as_deref(), Some("hi"));

        let req: ChatRequest = serde_json::from_str(r#"{"message": 42}"#).unwrap();
        assert!(req.message.is_none());

        let req: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert!(req.message.is_none());

        let req: ChatRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = ErrorBody {
            error: "Message is required".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "Message is required" })
        );
    }
}
