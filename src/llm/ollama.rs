//! Ollama-compatible chat service

use super::types::ModelChatRequest;
use super::{ModelService, RelayFailure};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct OllamaService {
    client: Client,
    endpoint: String,
    model_id: String,
}

impl OllamaService {
    pub fn new(
        base_url: &str,
        model_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            model_id: model_id.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelService for OllamaService {
    async fn chat(&self, request: &ModelChatRequest) -> Result<Value, RelayFailure> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayFailure::status(status.as_u16(), &body));
        }

        // Read raw bytes so a non-JSON body is reported as a decode failure
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
