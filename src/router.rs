//! Conversation router
//!
//! Derives the state for a turn, plans it with the pure transition
//! function, and carries out the single lookup the plan may ask for.
//! Holds no per-conversation data, so one router serves every turn
//! concurrently.

use crate::lookup::{ContentLookup, LookupError, NumberFacts};
use crate::state_machine::{transition, ConvState, Effect, IntentRegistry, Outcome};
use crate::turn::{TurnRequest, TurnResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Default deadline for a single lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

pub struct ConversationRouter {
    intents: Arc<IntentRegistry>,
    content: Arc<dyn ContentLookup>,
    numbers: Arc<dyn NumberFacts>,
    lookup_timeout: Duration,
}

impl ConversationRouter {
    pub fn new(
        intents: Arc<IntentRegistry>,
        content: Arc<dyn ContentLookup>,
        numbers: Arc<dyn NumberFacts>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            intents,
            content,
            numbers,
            lookup_timeout,
        }
    }

    /// Route one turn to its result.
    ///
    /// Never fails: lookup errors and timeouts become `ResolutionFailed`.
    pub async fn route(&self, request: &TurnRequest) -> TurnResult {
        let state = ConvState::from_request(request);
        tracing::Span::current().record("state", state.label());
        let intent = self.intents.classify(&request.intent_name);
        let effect = transition(&state, &intent, request);

        let outcome = self.execute(effect).await;

        if let Outcome::Fallback { intent_name, .. } = &outcome {
            tracing::info!(intent = %intent_name, "Unregistered intent, falling back");
        }
        tracing::info!(
            state = state.label(),
            outcome = outcome.label(),
            "Turn routed"
        );

        outcome.into_result()
    }

    /// Carry out an effect. At most one lookup, no retry.
    async fn execute(&self, effect: Effect) -> Outcome {
        match effect {
            Effect::Reply(outcome) => outcome,

            Effect::ResolveSubject { name, then, carry } => {
                let resolved = self.bounded(self.content.resolve(&name)).await;
                match resolved {
                    Ok(subject) => then.complete(subject, carry),
                    Err(e) => {
                        tracing::debug!(name = %name, kind = e.kind.as_str(), "Subject unresolved");
                        Outcome::ResolutionFailed { name, carry }
                    }
                }
            }

            Effect::FetchNumberFact {
                number,
                fact_type,
                carry,
            } => {
                let fetched = self.bounded(self.numbers.fact(&number, &fact_type)).await;
                match fetched {
                    Ok(text) => Outcome::NumberFact { text, carry },
                    Err(e) => {
                        tracing::debug!(number = %number, kind = e.kind.as_str(), "Number fact unavailable");
                        Outcome::ResolutionFailed {
                            name: number,
                            carry,
                        }
                    }
                }
            }
        }
    }

    /// Apply the lookup deadline
    async fn bounded<T>(
        &self,
        lookup: impl Future<Output = Result<T, LookupError>>,
    ) -> Result<T, LookupError> {
        match timeout(self.lookup_timeout, lookup).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = %self.lookup_timeout.as_millis(),
                    "Lookup timed out"
                );
                Err(LookupError::timeout(format!(
                    "no answer within {}ms",
                    self.lookup_timeout.as_millis()
                )))
            }
        }
    }
}
