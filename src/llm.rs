//! Model service abstraction
//!
//! The relay talks to exactly one chat-completion backend through this
//! interface.

mod error;
mod ollama;
mod types;

pub use error::{RelayFailure, RelayFailureKind, RELAY_FAILURE_MESSAGE};
pub use ollama::OllamaService;
pub use types::*;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Common interface for chat-completion backends
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Forward a request and return the response body untouched
    async fn chat(&self, request: &ModelChatRequest) -> Result<Value, RelayFailure>;

    /// The fixed model this service asks for
    fn model_id(&self) -> &str;
}

/// Logging wrapper for model services
///
/// The single place relay outcomes are logged; the HTTP layer only maps
/// failures to the generic response.
pub struct LoggingService {
    inner: Arc<dyn ModelService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn ModelService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl ModelService for LoggingService {
    async fn chat(&self, request: &ModelChatRequest) -> Result<Value, RelayFailure> {
        let start = std::time::Instant::now();
        let result = self.inner.chat(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(body) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    reply_chars = reply_content(body).map_or(0, |c| c.chars().count()),
                    response = %body,
                    "Model request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Model request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
