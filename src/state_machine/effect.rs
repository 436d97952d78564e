//! Effects produced by planning a turn

use super::outcome::{Outcome, Role};
use crate::lookup::Subject;
use crate::turn::Attributes;

/// What the router must do to finish a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No I/O needed
    Reply(Outcome),

    /// Resolve a subject, then answer per `then`
    ResolveSubject {
        name: String,
        then: Followup,
        /// Attributes to keep if resolution fails
        carry: Attributes,
    },

    /// Fetch number trivia
    FetchNumberFact {
        number: String,
        fact_type: String,
        carry: Attributes,
    },
}

/// How to answer once a subject resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Speak the synopsis; the canonical name becomes the subject
    Summary,
    /// Speak one fact; inbound attributes are re-propagated
    Detail { role: Role },
}

impl Followup {
    pub fn complete(self, subject: Subject, carry: Attributes) -> Outcome {
        match self {
            Followup::Summary => Outcome::Summary { subject },
            Followup::Detail { role } => Outcome::Detail {
                subject,
                role,
                carry,
            },
        }
    }
}

impl Effect {
    pub fn resolve_summary(name: impl Into<String>, carry: Attributes) -> Self {
        Effect::ResolveSubject {
            name: name.into(),
            then: Followup::Summary,
            carry,
        }
    }

    pub fn resolve_detail(name: impl Into<String>, role: Role, carry: Attributes) -> Self {
        Effect::ResolveSubject {
            name: name.into(),
            then: Followup::Detail { role },
            carry,
        }
    }

    /// Check whether finishing this effect needs a lookup
    #[cfg(test)]
    pub fn needs_lookup(&self) -> bool {
        !matches!(self, Effect::Reply(_))
    }
}
