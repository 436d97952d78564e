//! External content lookups
//!
//! The router depends only on the traits here; production HTTP clients and
//! test doubles both implement them.

mod error;
mod numbers;
mod omdb;

#[cfg(test)]
pub mod testing;

pub use error::LookupError;
pub use numbers::{NumbersApiClient, DEFAULT_NUMBERS_BASE_URL};
pub use omdb::{OmdbClient, DEFAULT_OMDB_BASE_URL};

#[cfg(test)]
pub use error::LookupErrorKind;

use async_trait::async_trait;
use std::sync::Arc;

/// A resolved subject of conversation (a movie)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Subject {
    /// Canonical name as reported by the provider
    pub name: String,
    pub synopsis: String,
    /// People who made it (directors)
    pub contributors: Vec<String>,
    /// People who appear in it (cast)
    pub participants: Vec<String>,
}

/// Resolves a subject name to facts about it
#[async_trait]
pub trait ContentLookup: Send + Sync {
    /// Resolve a name; `LookupErrorKind::NotFound` when there is no match
    async fn resolve(&self, name: &str) -> Result<Subject, LookupError>;

    /// Provider name for logs
    fn source(&self) -> &str;
}

/// Resolves a number to a trivia sentence
#[async_trait]
pub trait NumberFacts: Send + Sync {
    async fn fact(&self, number: &str, fact_type: &str) -> Result<String, LookupError>;

    /// Provider name for logs
    fn source(&self) -> &str;
}

/// Logging wrapper for content lookups
pub struct LoggingLookup {
    inner: Arc<dyn ContentLookup>,
    source: String,
}

impl LoggingLookup {
    pub fn new(inner: Arc<dyn ContentLookup>) -> Self {
        let source = inner.source().to_string();
        Self { inner, source }
    }
}

#[async_trait]
impl ContentLookup for LoggingLookup {
    async fn resolve(&self, name: &str) -> Result<Subject, LookupError> {
        let start = std::time::Instant::now();
        let result = self.inner.resolve(name).await;
        let duration = start.elapsed();

        match &result {
            Ok(subject) => {
                tracing::info!(
                    source = %self.source,
                    duration_ms = %duration.as_millis(),
                    requested = %name,
                    resolved = %subject.name,
                    "Subject resolved"
                );
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source,
                    duration_ms = %duration.as_millis(),
                    requested = %name,
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Subject lookup failed"
                );
            }
        }

        result
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// Logging wrapper for number facts
pub struct LoggingNumberFacts {
    inner: Arc<dyn NumberFacts>,
    source: String,
}

impl LoggingNumberFacts {
    pub fn new(inner: Arc<dyn NumberFacts>) -> Self {
        let source = inner.source().to_string();
        Self { inner, source }
    }
}

#[async_trait]
impl NumberFacts for LoggingNumberFacts {
    async fn fact(&self, number: &str, fact_type: &str) -> Result<String, LookupError> {
        let start = std::time::Instant::now();
        let result = self.inner.fact(number, fact_type).await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    source = %self.source,
                    duration_ms = %duration.as_millis(),
                    number = %number,
                    fact_type = %fact_type,
                    "Number fact fetched"
                );
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source,
                    duration_ms = %duration.as_millis(),
                    number = %number,
                    fact_type = %fact_type,
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Number fact lookup failed"
                );
            }
        }

        result
    }

    fn source(&self) -> &str {
        &self.source
    }
}
