//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`
///
/// `message` is only checked for presence by the model service, so any
/// JSON value (or none) is accepted and forwarded.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RelayChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl RelayChatRequest {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
        }
    }
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
