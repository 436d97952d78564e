//! OMDb-compatible movie metadata provider

use super::{ContentLookup, LookupError, Subject};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// OMDb marks absent fields with this literal
const NOT_AVAILABLE: &str = "N/A";

/// Movie lookup backed by an OMDb-compatible HTTP API
pub struct OmdbClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OmdbClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        })
    }

    fn normalize(requested: &str, record: OmdbRecord) -> Result<Subject, LookupError> {
        if !record.response.eq_ignore_ascii_case("true") {
            let message = record.error.unwrap_or_else(|| "no result".to_string());
            return Err(if message.to_ascii_lowercase().contains("not found") {
                LookupError::not_found(format!("{requested}: {message}"))
            } else {
                LookupError::unknown(format!("OMDb error for {requested}: {message}"))
            });
        }

        Ok(Subject {
            name: available(record.title).unwrap_or_else(|| requested.to_string()),
            synopsis: available(record.plot).unwrap_or_default(),
            contributors: split_names(record.director.as_deref()),
            participants: split_names(record.actors.as_deref()),
        })
    }
}

#[async_trait]
impl ContentLookup for OmdbClient {
    async fn resolve(&self, name: &str) -> Result<Subject, LookupError> {
        let mut query = vec![("t", name), ("plot", "short")];
        if let Some(key) = &self.api_key {
            query.push(("apikey", key.as_str()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
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

        let record: OmdbRecord = serde_json::from_str(&body).map_err(|e| {
            LookupError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Self::normalize(name, record)
    }

    fn source(&self) -> &str {
        "omdb"
    }
}

// OMDb API types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbRecord {
    response: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    actors: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn available(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != NOT_AVAILABLE)
}

fn split_names(field: Option<&str>) -> Vec<String> {
    field
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != NOT_AVAILABLE)
        .map(String::from)
        .collect()
}
