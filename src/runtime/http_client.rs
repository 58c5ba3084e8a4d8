//! Relay client over HTTP

use super::traits::{ClientError, RelayClient};
use crate::api::RelayChatRequest;
use crate::llm::reply_content;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub struct HttpRelayClient {
    client: Client,
    endpoint: String,
}

impl HttpRelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/chat", relay_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, message: &str) -> Result<Option<String>, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RelayChatRequest::text(message))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await?;
        Ok(reply_content(&body).map(str::to_owned))
    }
}
