//! Events that can occur in a conversation

use chrono::{DateTime, Utc};

/// Events that trigger state transitions
///
/// Each event carries the instant it happened so the transition itself
/// stays free of clock reads.
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    InputChanged {
        text: String,
    },
    UserSubmit {
        text: String,
        at: DateTime<Utc>,
    },
    UserClear,

    // Local interception
    CannedReplyDue {
        at: DateTime<Utc>,
    },

    // Relay events
    RelayReplied {
        /// `message.content` of the relay response, if it had one
        content: Option<String>,
        at: DateTime<Utc>,
    },
    RelayFailed {
        message: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn submit(text: impl Into<String>) -> Self {
        Event::UserSubmit {
            text: text.into(),
            at: Utc::now(),
        }
    }
}
