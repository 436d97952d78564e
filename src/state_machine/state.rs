//! Conversation state types

use crate::turn::{Attributes, TurnRequest, SUBJECT_KEY};

/// Conversation state, rebuilt from every inbound turn
///
/// Nothing is stored server-side; the state is a pure function of the
/// request's session flag and echoed attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvState {
    /// First turn of a session; inbound attributes are ignored
    Fresh,

    /// A previous turn stored the subject under discussion
    Engaged {
        subject: String,
        /// Inbound attributes, echoed back when the turn keeps them
        attributes: Attributes,
    },

    /// Session continues but no subject has been established yet
    Unanchored { attributes: Attributes },
}

impl ConvState {
    /// Derive the state for an inbound turn
    pub fn from_request(request: &TurnRequest) -> Self {
        if request.is_new_session {
            return ConvState::Fresh;
        }

        let attributes = request.session_attributes.clone();
        match attributes.get(SUBJECT_KEY) {
            Some(subject) if !subject.is_empty() => ConvState::Engaged {
                subject: subject.clone(),
                attributes,
            },
            _ => ConvState::Unanchored { attributes },
        }
    }

    /// Attributes to hand back when a turn leaves the session unchanged
    ///
    /// This is the whole inbound map, not just `{subject}`, so unknown keys
    /// the platform echoes survive detail and failure turns.
    pub fn carried_attributes(&self) -> Attributes {
        match self {
            ConvState::Fresh => Attributes::new(),
            ConvState::Engaged { attributes, .. } | ConvState::Unanchored { attributes } => {
                attributes.clone()
            }
        }
    }

    /// Short label used in structured logs
    pub fn label(&self) -> &'static str {
        match self {
            ConvState::Fresh => "fresh",
            ConvState::Engaged { .. } => "engaged",
            ConvState::Unanchored { .. } => "unanchored",
        }
    }
}
