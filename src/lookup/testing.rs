//! Mock lookups for testing
//!
//! In-memory stand-ins for the HTTP providers.

use super::{ContentLookup, LookupError, NumberFacts, Subject};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

// ============================================================================
// Mock Content Lookup
// ============================================================================

/// Mock content lookup serving a fixed catalogue
pub struct MockLookup {
    subjects: HashMap<String, Subject>,
    failure: Option<fn(&str) -> LookupError>,
    delay: Option<Duration>,
    /// Record of every name resolved
    pub calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self {
            subjects: HashMap::new(),
            failure: None,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve `subject` when `name` is requested
    pub fn with_subject(mut self, name: impl Into<String>, subject: Subject) -> Self {
        self.subjects.insert(name.into(), subject);
        self
    }

    /// Fail every call with the produced error
    pub fn failing(mut self, failure: fn(&str) -> LookupError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentLookup for MockLookup {
    async fn resolve(&self, name: &str) -> Result<Subject, LookupError> {
        self.calls.lock().unwrap().push(name.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = self.failure {
            return Err(failure(name));
        }
        self.subjects
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::not_found(format!("no mock subject named {name}")))
    }

    fn source(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Mock Number Facts
// ============================================================================

/// Mock number facts keyed by `(number, fact_type)`
pub struct MockNumberFacts {
    facts: HashMap<(String, String), String>,
    /// Record of every `(number, fact_type)` requested
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockNumberFacts {
    pub fn new() -> Self {
        Self {
            facts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fact(
        mut self,
        number: impl Into<String>,
        fact_type: impl Into<String>,
        fact: impl Into<String>,
    ) -> Self {
        self.facts
            .insert((number.into(), fact_type.into()), fact.into());
        self
    }

    pub fn recorded_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockNumberFacts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NumberFacts for MockNumberFacts {
    async fn fact(&self, number: &str, fact_type: &str) -> Result<String, LookupError> {
        let key = (number.to_string(), fact_type.to_string());
        self.calls.lock().unwrap().push(key.clone());
        self.facts
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::not_found(format!("no mock fact for {number}/{fact_type}")))
    }

    fn source(&self) -> &str {
        "mock"
    }
}

/// A subject with a short synopsis and one director
pub fn inception() -> Subject {
    Subject {
        name: "Inception".to_string(),
        synopsis: "A thief steals corporate secrets through dream-sharing tech.".to_string(),
        contributors: vec!["C. Nolan".to_string()],
        participants: vec!["Leonardo DiCaprio".to_string(), "Elliot Page".to_string()],
    }
}
