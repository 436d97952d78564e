//! Wire envelope for the skill endpoint
//!
//! Parses inbound request envelopes into turns and renders turn results
//! into the response envelope the platform expects.

mod request;
mod response;


pub use request::{parse, ParseError};
pub use response::{render, TurnResponse};

#[cfg(test)]
pub use response::MAX_SPEECH_CHARS;
