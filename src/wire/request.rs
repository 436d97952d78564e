//! Inbound envelope parsing

use crate::turn::{Attributes, TurnRequest};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while parsing an inbound envelope
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ParseError {
    fn malformed(message: impl Into<String>) -> Self {
        ParseError::MalformedRequest(message.into())
    }
}

// ============================================================================
// Envelope shape (only the fields the router depends on)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RequestEnvelope {
    #[serde(default)]
    session: Option<SessionBlock>,
    #[serde(default)]
    request: Option<RequestBlock>,
}

#[derive(Debug, Deserialize)]
struct SessionBlock {
    #[serde(default)]
    new: bool,
    #[serde(default)]
    attributes: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RequestBlock {
    #[serde(default)]
    intent: Option<IntentBlock>,
}

#[derive(Debug, Deserialize)]
struct IntentBlock {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slots: Option<BTreeMap<String, SlotBlock>>,
}

/// Unfilled slots arrive with a name but no value
#[derive(Debug, Deserialize)]
struct SlotBlock {
    #[serde(default)]
    value: Option<Value>,
}

/// Parse a raw request body into a [`TurnRequest`].
///
/// A missing `session` block is read as the first turn of a new session.
pub fn parse(body: &[u8]) -> Result<TurnRequest, ParseError> {
    let envelope: RequestEnvelope = serde_json::from_slice(body)
        .map_err(|e| ParseError::malformed(format!("invalid JSON envelope: {e}")))?;

    let request = envelope
        .request
        .ok_or_else(|| ParseError::malformed("missing request block"))?;
    let intent = request
        .intent
        .ok_or_else(|| ParseError::malformed("missing intent block"))?;
    let intent_name = intent
        .name
        .ok_or_else(|| ParseError::malformed("intent has no name"))?;

    let slots = intent
        .slots
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, slot)| match slot.value? {
            Value::String(value) => Some((name, value)),
            Value::Null => None,
            other => {
                tracing::debug!(slot = %name, value = %other, "Dropping non-string slot value");
                None
            }
        })
        .collect();

    let (is_new_session, session_attributes) = match envelope.session {
        Some(session) => (
            session.new,
            string_attributes(session.attributes.unwrap_or_default()),
        ),
        None => (true, Attributes::new()),
    };

    Ok(TurnRequest {
        is_new_session,
        intent_name,
        slots,
        session_attributes,
    })
}

/// Keep only string-valued attributes
fn string_attributes(raw: BTreeMap<String, Value>) -> Attributes {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                tracing::debug!(key = %key, value = %other, "Dropping non-string session attribute");
                None
            }
        })
        .collect()
}
