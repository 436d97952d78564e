//! Turn outcomes and how each one is spoken

use crate::lookup::Subject;
use crate::turn::{Attributes, TurnResult};

pub const START_OVER_PROMPT: &str = "OK, what movie would you like to know about?";
pub const NO_SUBJECT_PROMPT: &str = "What movie would you like to know about?";
pub const NUMBER_PROMPT: &str = "Which number would you like a fact about?";
pub const FALLBACK_PROMPT: &str =
    "Sorry, I didn't understand. You can ask me about a movie, or say start over.";
pub const GREETING: &str = "Hello World";

/// Which fact a follow-up asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Directed,
    StarredIn,
}

impl Role {
    /// Parse the `Role` slot ("directed", "starred in")
    pub fn from_slot(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "directed" => Some(Role::Directed),
            "starred in" => Some(Role::StarredIn),
            _ => None,
        }
    }
}

/// Result of a handler, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Synopsis of a newly resolved subject
    Summary { subject: Subject },

    /// A single fact about the subject under discussion
    Detail {
        subject: Subject,
        role: Role,
        carry: Attributes,
    },

    /// Conversation reset
    Cleared,

    Greeting { carry: Attributes },

    /// Intent not registered
    Fallback {
        intent_name: String,
        carry: Attributes,
    },

    /// A subject is needed but none was named or stored
    NoSubject { carry: Attributes },

    /// Follow-up with a missing or unsupported role
    RoleClarification { subject: String, carry: Attributes },

    /// Number fact requested without a number
    NumberPrompt { carry: Attributes },

    NumberFact { text: String, carry: Attributes },

    /// Lookup returned nothing, failed, or timed out
    ResolutionFailed { name: String, carry: Attributes },
}

impl Outcome {
    /// Convert into the result handed to the response builder
    pub fn into_result(self) -> TurnResult {
        match self {
            Outcome::Summary { subject } => {
                let speech = if subject.synopsis.trim().is_empty() {
                    format!("I don't have a synopsis for {}.", subject.name)
                } else {
                    subject.synopsis
                };
                TurnResult::new(speech).with_subject(subject.name)
            }
            Outcome::Detail {
                subject,
                role,
                carry,
            } => TurnResult::new(detail_speech(&subject, role)).with_attributes(carry),
            Outcome::Cleared => TurnResult::new(START_OVER_PROMPT).ending_session(),
            Outcome::Greeting { carry } => TurnResult::new(GREETING).with_attributes(carry),
            Outcome::Fallback { carry, .. } => {
                TurnResult::new(FALLBACK_PROMPT).with_attributes(carry)
            }
            Outcome::NoSubject { carry } => {
                TurnResult::new(NO_SUBJECT_PROMPT).with_attributes(carry)
            }
            Outcome::RoleClarification { subject, carry } => TurnResult::new(format!(
                "You can ask who directed or starred in {subject}."
            ))
            .with_attributes(carry),
            Outcome::NumberPrompt { carry } => TurnResult::new(NUMBER_PROMPT).with_attributes(carry),
            Outcome::NumberFact { text, carry } => TurnResult::new(text).with_attributes(carry),
            Outcome::ResolutionFailed { name, carry } => {
                TurnResult::new(format!("Sorry, I couldn't find anything about {name}."))
                    .with_attributes(carry)
            }
        }
    }

    /// Short label used in structured logs
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Summary { .. } => "summary",
            Outcome::Detail { .. } => "detail",
            Outcome::Cleared => "cleared",
            Outcome::Greeting { .. } => "greeting",
            Outcome::Fallback { .. } => "fallback",
            Outcome::NoSubject { .. } => "no_subject",
            Outcome::RoleClarification { .. } => "role_clarification",
            Outcome::NumberPrompt { .. } => "number_prompt",
            Outcome::NumberFact { .. } => "number_fact",
            Outcome::ResolutionFailed { .. } => "resolution_failed",
        }
    }
}

fn detail_speech(subject: &Subject, role: Role) -> String {
    let name = &subject.name;
    match role {
        Role::Directed if subject.contributors.is_empty() => {
            format!("I don't know who directed {name}.")
        }
        Role::Directed => format!(
            "{name} was directed by {}",
            subject.contributors.join(", ")
        ),
        Role::StarredIn if subject.participants.is_empty() => {
            format!("I don't know who starred in {name}.")
        }
        Role::StarredIn => format!("{name} starred {}", subject.participants.join(", ")),
    }
}
