//! numbersapi-compatible trivia provider

use super::{LookupError, NumberFacts};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_NUMBERS_BASE_URL: &str = "http://numbersapi.com";

/// Number trivia backed by a numbersapi-compatible HTTP API
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NumberFacts for NumbersApiClient {
    async fn fact(&self, number: &str, fact_type: &str) -> Result<String, LookupError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| LookupError::unknown(format!("Invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| LookupError::unknown(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(number)
            .push(fact_type);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::from_transport(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(LookupError::from_status(status, &body));
        }

        let fact = body.trim();
        if fact.is_empty() {
            return Err(LookupError::not_found(format!("No {fact_type} fact for {number}")));
        }
        Ok(fact.to_string())
    }

    fn source(&self) -> &str {
        "numbersapi"
    }
}
