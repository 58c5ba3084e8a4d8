//! Environment-driven configuration for the relay and the console client

use crate::llm::{LoggingService, ModelService, OllamaService};
use crate::state_machine::ConvContext;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MODEL_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001";

/// Relay server configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    /// Base URL of the model service, without the `/api/chat` suffix
    pub model_url: String,
    /// Model requested for every chat; never taken from the client
    pub model: String,
    pub model_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            model_url: DEFAULT_MODEL_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            model_timeout: DEFAULT_MODEL_TIMEOUT,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("IDCARE_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            model_url: lookup("IDCARE_MODEL_URL").unwrap_or(defaults.model_url),
            model: lookup("IDCARE_MODEL").unwrap_or(defaults.model),
            model_timeout: lookup("IDCARE_MODEL_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map_or(defaults.model_timeout, Duration::from_secs),
        }
    }

    /// Build the downstream service, wrapped with request logging
    pub fn model_service(&self) -> Result<Arc<dyn ModelService>, reqwest::Error> {
        let service = OllamaService::new(&self.model_url, &self.model, self.model_timeout)?;
        Ok(Arc::new(LoggingService::new(Arc::new(service))))
    }
}

/// Console client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay, without the `/api/chat` suffix
    pub relay_url: String,
    pub thinking_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            thinking_delay: ConvContext::default().thinking_delay,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            relay_url: lookup("IDCARE_RELAY_URL").unwrap_or(defaults.relay_url),
            thinking_delay: lookup("IDCARE_THINKING_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .map_or(defaults.thinking_delay, Duration::from_millis),
        }
    }

    pub fn context(&self) -> ConvContext {
        ConvContext::new(self.thinking_delay)
    }
}
