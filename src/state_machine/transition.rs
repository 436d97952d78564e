//! Pure turn planning
//!
//! Given the derived state, the classified intent and the request's slots,
//! decide what the turn does. No I/O happens here; lookups are requested
//! through [`Effect`] and carried out by the router.
//!
//! Precedence, first match wins:
//! 1. `ClearSession` resets regardless of state
//! 2. unregistered intents fall back
//! 3. subject intents without a stored subject resolve the `Movie` slot
//! 4. `FollowUp` on an engaged subject re-resolves it and branches on `Role`

use super::intent::{Intent, IntentKind};
use super::outcome::{Outcome, Role};
use super::{ConvState, Effect};
use crate::turn::TurnRequest;

pub const MOVIE_SLOT: &str = "Movie";
pub const ROLE_SLOT: &str = "Role";
pub const NUMBER_SLOT: &str = "Number";
pub const FACT_TYPE_SLOT: &str = "FactType";

/// Fact type asked for when the `FactType` slot is empty
pub const DEFAULT_FACT_TYPE: &str = "trivia";

/// Pure transition function
///
/// Every (intent, state) pair is matched explicitly so a new intent kind
/// cannot compile without a defined outcome.
pub fn transition(state: &ConvState, intent: &Intent, request: &TurnRequest) -> Effect {
    match (intent, state) {
        // ============================================================
        // Reset and fallback
        // ============================================================
        (Intent::Known(IntentKind::ClearSession), _) => Effect::Reply(Outcome::Cleared),

        (Intent::Unknown(name), _) => Effect::Reply(Outcome::Fallback {
            intent_name: name.clone(),
            carry: state.carried_attributes(),
        }),

        // ============================================================
        // Subject-independent intents
        // ============================================================
        (Intent::Known(IntentKind::HelloWorld), _) => Effect::Reply(Outcome::Greeting {
            carry: state.carried_attributes(),
        }),

        (Intent::Known(IntentKind::NumberFact), _) => plan_number_fact(state, request),

        // ============================================================
        // No stored subject: resolve whatever the Movie slot names
        // ============================================================
        (
            Intent::Known(IntentKind::MovieFacts | IntentKind::FollowUp),
            ConvState::Fresh | ConvState::Unanchored { .. },
        ) => plan_summary_from_slot(state, request),

        // ============================================================
        // Engaged
        // ============================================================

        // A named movie switches subject; a bare request re-summarises
        (Intent::Known(IntentKind::MovieFacts), ConvState::Engaged { subject, .. }) => {
            let name = request
                .slot(MOVIE_SLOT)
                .ok()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(subject.as_str());
            Effect::resolve_summary(name, state.carried_attributes())
        }

        (Intent::Known(IntentKind::FollowUp), ConvState::Engaged { subject, .. }) => {
            let carry = state.carried_attributes();
            match request.slot(ROLE_SLOT).ok().and_then(Role::from_slot) {
                Some(role) => Effect::resolve_detail(subject.clone(), role, carry),
                None => Effect::Reply(Outcome::RoleClarification {
                    subject: subject.clone(),
                    carry,
                }),
            }
        }
    }
}

fn plan_summary_from_slot(state: &ConvState, request: &TurnRequest) -> Effect {
    let carry = state.carried_attributes();
    match request.slot(MOVIE_SLOT) {
        Ok(name) if !name.trim().is_empty() => Effect::resolve_summary(name.trim(), carry),
        _ => Effect::Reply(Outcome::NoSubject { carry }),
    }
}

fn plan_number_fact(state: &ConvState, request: &TurnRequest) -> Effect {
    let carry = state.carried_attributes();
    let Some(number) = request
        .slot(NUMBER_SLOT)
        .ok()
        .map(str::trim)
        .filter(|number| !number.is_empty())
    else {
        return Effect::Reply(Outcome::NumberPrompt { carry });
    };

    let fact_type = request
        .slot(FACT_TYPE_SLOT)
        .map(|t| t.trim().to_ascii_lowercase())
        .ok()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_FACT_TYPE.to_string());

    Effect::FetchNumberFact {
        number: number.to_string(),
        fact_type,
        carry,
    }
}
