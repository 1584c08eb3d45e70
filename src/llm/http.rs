use crate::llm::client::{ModelClient, RemoteResponse, TransportError};
use crate::types::{AppError, Result};
use crate::utils::config::ModelConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// `reqwest`-backed client for the hosted model endpoint.
///
/// Sends `Authorization: Bearer <key>` and a JSON body; the per-call timeout
/// is supplied by the caller so chat and health probes can differ.
pub struct HttpModelClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpModelClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("better-health/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.api_key.clone())
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn post_json(
        &self,
        payload: &Value,
        timeout: Duration,
    ) -> std::result::Result<RemoteResponse, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(e, timeout))?;

        Ok(RemoteResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

// Timeout is checked first: a connect that times out reports both.
fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
