//! Downstream failure type
//!
//! Every way the model call can fail collapses into one `RelayFailure`
//! before it reaches the HTTP boundary.

use thiserror::Error;

/// The only error text clients ever see from the relay
pub const RELAY_FAILURE_MESSAGE: &str = "Failed to get response from Ollama API";

/// Model service failure with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RelayFailure {
    pub kind: RelayFailureKind,
    pub message: String,
}

impl RelayFailure {
    pub fn new(kind: RelayFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(RelayFailureKind::Transport, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(RelayFailureKind::Timeout, message)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::new(
            RelayFailureKind::Status(status),
            format!("model service returned {status}: {body}"),
        )
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(RelayFailureKind::Decode, message)
    }
}

impl From<reqwest::Error> for RelayFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(err.to_string())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// What went wrong talking to the model service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayFailureKind {
    /// Connection refused, DNS, reset
    Transport,
    Timeout,
    /// Non-2xx status
    Status(u16),
    /// Body was not JSON
    Decode,
}

impl RelayFailureKind {
    /// Short label for structured logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Timeout => "timeout",
            Self::Status(_) => "status",
            Self::Decode => "decode",
        }
    }
}
