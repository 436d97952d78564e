//! Conversation state machine
//!
//! Pure planning over explicit states; the router performs the lookups the
//! plan asks for.

mod effect;
pub mod intent;
pub mod outcome;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use intent::IntentRegistry;
pub use outcome::Outcome;
pub use state::ConvState;
pub use transition::transition;
