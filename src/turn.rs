//! Turn data model
//!
//! A turn is one request/response exchange. Nothing here outlives the HTTP
//! call that produced it; cross-turn memory lives only in the session
//! attributes the caller echoes back.

use std::collections::BTreeMap;
use thiserror::Error;

/// Session attribute key holding the subject under discussion
pub const SUBJECT_KEY: &str = "subject";

/// Opaque key/value state round-tripped through the caller
pub type Attributes = BTreeMap<String, String>;

/// Slot lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot '{0}' was not provided")]
    Missing(String),
}

/// One inbound turn, immutable once parsed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnRequest {
    pub is_new_session: bool,
    pub intent_name: String,
    pub slots: BTreeMap<String, String>,
    pub session_attributes: Attributes,
}

impl TurnRequest {
    /// Look up a slot value by name.
    ///
    /// An absent slot is an error, never an empty string.
    pub fn slot(&self, name: &str) -> Result<&str, SlotError> {
        self.slots
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SlotError::Missing(name.to_string()))
    }
}

/// Outcome of routing a turn, produced by exactly one handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub speech_text: String,
    pub session_attributes: Attributes,
    pub end_session: bool,
}

impl TurnResult {
    pub fn new(speech_text: impl Into<String>) -> Self {
        Self {
            speech_text: speech_text.into(),
            session_attributes: Attributes::new(),
            end_session: false,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.session_attributes = attributes;
        self
    }

    pub fn with_subject(self, subject: impl Into<String>) -> Self {
        self.with_attributes(subject_attributes(subject))
    }

    pub fn ending_session(mut self) -> Self {
        self.end_session = true;
        self
    }
}

/// Attribute map carrying only the subject key
pub fn subject_attributes(subject: impl Into<String>) -> Attributes {
    Attributes::from([(SUBJECT_KEY.to_string(), subject.into())])
}
