use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{FetchError, RateProvider};
use crate::models::{Config, RateEnvelope};

/// ScopeX rate API client
pub struct ScopexClient {
    client: Client,
    endpoint: String,
}

impl ScopexClient {
    /// Create a new ScopeX client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait::async_trait]
impl RateProvider for ScopexClient {
    async fn current_rate(&self) -> Result<Option<f64>, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        debug!("Making request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .headers(headers)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: RateEnvelope = serde_json::from_str(&body)?;
        debug!("API response received: {} bytes", body.len());

        Ok(envelope.rate())
    }
}
