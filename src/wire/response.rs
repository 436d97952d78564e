//! Outbound envelope rendering

use crate::turn::{Attributes, TurnResult};
use serde::Serialize;

/// Hard limit on spoken output, in characters
pub const MAX_SPEECH_CHARS: usize = 140;

const RESPONSE_VERSION: &str = "1.0";

/// Wire response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub session_attributes: Attributes,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
        }
    }
}

/// Render a handler result into the wire envelope.
///
/// Truncation happens here for every result, canned prompts included.
///
/// # Panics
///
/// Panics if the result carries no speech text; every handler must say
/// something.
pub fn render(result: &TurnResult) -> TurnResponse {
    assert!(
        !result.speech_text.is_empty(),
        "handler produced a turn result without speech text"
    );

    TurnResponse {
        version: RESPONSE_VERSION,
        session_attributes: result.session_attributes.clone(),
        response: ResponseBody {
            output_speech: OutputSpeech::PlainText {
                text: truncate_speech(&result.speech_text),
            },
            should_end_session: result.end_session,
        },
    }
}

/// Cut speech to the first [`MAX_SPEECH_CHARS`] characters.
///
/// Not word-boundary aware; counts Unicode scalar values.
pub fn truncate_speech(text: &str) -> String {
    match text.char_indices().nth(MAX_SPEECH_CHARS) {
        Some((byte_idx, _)) => text.get(..byte_idx).unwrap_or(text).to_string(),
        None => text.to_string(),
    }
}
