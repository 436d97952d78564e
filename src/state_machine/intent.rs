//! Intent definitions and the startup-built intent registry
//!
//! All intents the skill answers are declared in one table; the registry
//! built from it is immutable and injected into the router.

use std::collections::HashMap;

/// Handler selected for a registered intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Summarise a movie named in the `Movie` slot
    MovieFacts,
    /// Ask about the movie already under discussion
    FollowUp,
    /// Reset the conversation
    ClearSession,
    /// Trivia about the number in the `Number` slot
    NumberFact,
    HelloWorld,
}

/// Intent definition with metadata
#[derive(Debug, Clone)]
pub struct IntentDef {
    /// Name as sent by the platform
    pub name: &'static str,
    pub kind: IntentKind,
    /// Sample utterance, logged at registration
    pub description: &'static str,
}

/// Get all intent definitions the skill registers
pub fn all_intents() -> &'static [IntentDef] {
    &[
        IntentDef {
            name: "MovieFacts",
            kind: IntentKind::MovieFacts,
            description: "Tell me about {Movie}",
        },
        IntentDef {
            name: "FollowUp",
            kind: IntentKind::FollowUp,
            description: "Who {Role} it?",
        },
        IntentDef {
            name: "ClearSession",
            kind: IntentKind::ClearSession,
            description: "Start over",
        },
        IntentDef {
            name: "AMAZON.StartOverIntent",
            kind: IntentKind::ClearSession,
            description: "Platform start-over",
        },
        IntentDef {
            name: "NumberFact",
            kind: IntentKind::NumberFact,
            description: "Tell me a {FactType} fact about {Number}",
        },
        IntentDef {
            name: "HelloWorld",
            kind: IntentKind::HelloWorld,
            description: "Say hello",
        },
    ]
}

/// Classification of an inbound intent name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Known(IntentKind),
    Unknown(String),
}

/// Immutable name -> intent table
#[derive(Debug, Clone)]
pub struct IntentRegistry {
    intents: HashMap<&'static str, IntentKind>,
}

impl IntentRegistry {
    pub fn new(defs: &[IntentDef]) -> Self {
        let intents = defs
            .iter()
            .map(|def| {
                tracing::debug!(
                    intent = def.name,
                    description = def.description,
                    "Registering intent"
                );
                (def.name, def.kind)
            })
            .collect();
        Self { intents }
    }

    /// Registry holding every intent in [`all_intents`]
    pub fn standard() -> Self {
        Self::new(all_intents())
    }

    pub fn classify(&self, name: &str) -> Intent {
        match self.intents.get(name) {
            Some(kind) => Intent::Known(*kind),
            None => Intent::Unknown(name.to_string()),
        }
    }

    /// List all registered intent names
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.intents.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
