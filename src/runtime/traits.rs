//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Ways a relay call can fail, as seen by the conversation
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach relay: {0}")]
    Transport(String),
    #[error("relay request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed relay response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Client for the relay's chat endpoint
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Send one user message. `Ok` carries the reply's `message.content`,
    /// or `None` when the relay answered without one.
    async fn send(&self, message: &str) -> Result<Option<String>, ClientError>;
}

#[async_trait]
impl<T: RelayClient + ?Sized> RelayClient for Arc<T> {
    async fn send(&self, message: &str) -> Result<Option<String>, ClientError> {
        (**self).send(message).await
    }
}
