//! Environment-driven configuration

use crate::lookup::{DEFAULT_NUMBERS_BASE_URL, DEFAULT_OMDB_BASE_URL};
use crate::router::DEFAULT_LOOKUP_TIMEOUT;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;

/// Server and lookup settings
#[derive(Debug, Clone)]
pub struct SkillConfig {
    pub port: u16,
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: String,
    pub numbers_base_url: String,
    /// Deadline for a single content lookup
    pub lookup_timeout: Duration,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            omdb_api_key: None,
            omdb_base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            numbers_base_url: DEFAULT_NUMBERS_BASE_URL.to_string(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl SkillConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable numbers fall
    /// back to defaults.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("SKILL_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            omdb_api_key: non_empty("OMDB_API_KEY"),
            omdb_base_url: non_empty("OMDB_BASE_URL").unwrap_or(defaults.omdb_base_url),
            numbers_base_url: non_empty("NUMBERS_BASE_URL").unwrap_or(defaults.numbers_base_url),
            lookup_timeout: non_empty("LOOKUP_TIMEOUT_MS")
                .and_then(|ms| ms.trim().parse().ok())
                .map_or(defaults.lookup_timeout, Duration::from_millis),
        }
    }
}
