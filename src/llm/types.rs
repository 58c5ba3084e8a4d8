//! Wire types for the downstream chat-completion service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message role as the model service spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// One entry of the `messages` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMessage {
    pub role: MessageRole,
    /// Whatever the client sent as `message`, forwarded untouched.
    /// Left out entirely when the client sent nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Request body for `POST /api/chat` on the model service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelChatRequest {
    pub model: String,
    pub messages: Vec<ModelMessage>,
    pub stream: bool,
}

impl ModelChatRequest {
    /// A non-streaming request carrying only the latest user message.
    /// Earlier turns are never sent.
    pub fn single_turn(model: impl Into<String>, content: Option<Value>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ModelMessage {
                role: MessageRole::User,
                content,
            }],
            stream: false,
        }
    }
}

/// Pull `message.content` out of a chat-completion body
pub fn reply_content(body: &Value) -> Option<&str> {
    body.pointer("/message/content").and_then(Value::as_str)
}
