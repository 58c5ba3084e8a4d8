//! Conversation state types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_error: bool,
}

impl Turn {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp,
            is_error: false,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp,
            is_error: false,
        }
    }

    /// Assistant turn rendered in the error style
    pub fn assistant_error(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            is_error: true,
            ..Self::assistant(content, timestamp)
        }
    }
}

/// Client-side conversation state
///
/// `turns` only grows, except when the whole log is cleared. At most one
/// reply is outstanding at a time, gated by `awaiting_reply`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvState {
    pub turns: Vec<Turn>,
    /// Contents of the input box
    pub pending_input: String,
    pub awaiting_reply: bool,
    /// Banner-level error, shown apart from the turns
    pub last_error: Option<String>,
}

impl ConvState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission of `text` would be accepted right now
    pub fn can_submit(&self, text: &str) -> bool {
        !self.awaiting_reply && !text.trim().is_empty()
    }
}

/// Fixed behaviour of a conversation
#[derive(Debug, Clone)]
pub struct ConvContext {
    /// Delay before the canned identity reply is shown
    pub thinking_delay: std::time::Duration,
}

/// Delay used by the browser client before showing the identity reply
pub const DEFAULT_THINKING_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

impl ConvContext {
    pub fn new(thinking_delay: std::time::Duration) -> Self {
        Self { thinking_delay }
    }
}

impl Default for ConvContext {
    fn default() -> Self {
        Self::new(DEFAULT_THINKING_DELAY)
    }
}
