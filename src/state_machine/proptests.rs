//! Property-based tests for the state machine
//!
//! These tests verify the routing invariants hold across arbitrary turns:
//! - `ClearSession` always resets, whatever else the turn carries
//! - A new session never reads inbound attributes
//! - An engaged follow-up always hands back the inbound subject
//! - Unregistered intents always fall back, never reach a lookup

use super::intent::{Intent, IntentKind, IntentRegistry};
use super::transition::*;
use super::*;
use crate::lookup::Subject;
use crate::turn::{subject_attributes, Attributes, TurnRequest, TurnResult, SUBJECT_KEY};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Test Helpers
// ============================================================================

/// Finish an effect the way the router would, with canned lookup results
fn finish(effect: Effect, lookup_ok: bool) -> TurnResult {
    let outcome = match effect {
        Effect::Reply(outcome) => outcome,
        Effect::ResolveSubject { name, then, carry } => {
            if lookup_ok {
                then.complete(arb_subject_named(&name), carry)
            } else {
                Outcome::ResolutionFailed { name, carry }
            }
        }
        Effect::FetchNumberFact { number, carry, .. } => {
            if lookup_ok {
                Outcome::NumberFact {
                    text: format!("{number} is a number."),
                    carry,
                }
            } else {
                Outcome::ResolutionFailed {
                    name: number,
                    carry,
                }
            }
        }
    };
    outcome.into_result()
}

fn arb_subject_named(name: &str) -> Subject {
    Subject {
        name: name.to_string(),
        synopsis: format!("All about {name}."),
        contributors: vec!["A. Director".to_string()],
        participants: vec!["A. Star".to_string(), "B. Star".to_string()],
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_registered_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MovieFacts".to_string()),
        Just("FollowUp".to_string()),
        Just("ClearSession".to_string()),
        Just("AMAZON.StartOverIntent".to_string()),
        Just("NumberFact".to_string()),
        Just("HelloWorld".to_string()),
    ]
}

fn arb_unregistered_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}Intent".prop_filter("must not be registered", |name| {
        matches!(IntentRegistry::standard().classify(name), Intent::Unknown(_))
    })
}

fn arb_intent_name() -> impl Strategy<Value = String> {
    prop_oneof![3 => arb_registered_name(), 1 => arb_unregistered_name()]
}

fn arb_role() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("directed".to_string())),
        Just(Some("starred in".to_string())),
        "[a-z ]{1,12}".prop_map(Some),
        Just(None),
    ]
}

fn arb_slots() -> impl Strategy<Value = BTreeMap<String, String>> {
    (
        proptest::option::of("[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10})?"),
        arb_role(),
        proptest::option::of("[0-9]{1,4}"),
    )
        .prop_map(|(movie, role, number)| {
            let mut slots = BTreeMap::new();
            if let Some(movie) = movie {
                slots.insert(MOVIE_SLOT.to_string(), movie);
            }
            if let Some(role) = role {
                slots.insert(ROLE_SLOT.to_string(), role);
            }
            if let Some(number) = number {
                slots.insert(NUMBER_SLOT.to_string(), number);
            }
            slots
        })
}

fn arb_attributes() -> impl Strategy<Value = Attributes> {
    prop_oneof![
        Just(Attributes::new()),
        "[A-Z][a-z]{1,12}".prop_map(|subject: String| subject_attributes(subject)),
        proptest::collection::btree_map("[a-z]{1,8}", "[a-z]{0,8}", 1..3),
    ]
}

fn arb_request() -> impl Strategy<Value = TurnRequest> {
    (any::<bool>(), arb_intent_name(), arb_slots(), arb_attributes()).prop_map(
        |(is_new_session, intent_name, slots, session_attributes)| TurnRequest {
            is_new_session,
            intent_name,
            slots,
            session_attributes,
        },
    )
}

fn plan(request: &TurnRequest) -> Effect {
    let state = ConvState::from_request(request);
    let intent = IntentRegistry::standard().classify(&request.intent_name);
    transition(&state, &intent, request)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_clear_session_always_resets(mut request in arb_request(), lookup_ok in any::<bool>()) {
        request.intent_name = "ClearSession".to_string();
        let result = finish(plan(&request), lookup_ok);

        prop_assert!(result.end_session);
        prop_assert!(result.session_attributes.is_empty());
    }

    #[test]
    fn prop_fresh_session_ignores_attributes(
        mut request in arb_request(),
        other in arb_attributes(),
    ) {
        request.is_new_session = true;
        let mut stale = request.clone();
        stale.session_attributes = other;

        prop_assert_eq!(plan(&request), plan(&stale));
    }

    #[test]
    fn prop_engaged_follow_up_carries_subject(
        subject in "[A-Z][a-z]{1,12}",
        role in arb_role(),
        lookup_ok in any::<bool>(),
    ) {
        let mut slots = BTreeMap::new();
        if let Some(role) = role {
            slots.insert(ROLE_SLOT.to_string(), role);
        }
        let request = TurnRequest {
            is_new_session: false,
            intent_name: "FollowUp".to_string(),
            slots,
            session_attributes: subject_attributes(subject.clone()),
        };

        let result = finish(plan(&request), lookup_ok);

        prop_assert_eq!(result.session_attributes.get(SUBJECT_KEY), Some(&subject));
        prop_assert!(!result.end_session);
    }

    #[test]
    fn prop_unregistered_intent_falls_back(
        mut request in arb_request(),
        name in arb_unregistered_name(),
    ) {
        request.intent_name = name;
        let effect = plan(&request);

        let is_fallback = matches!(effect, Effect::Reply(Outcome::Fallback { .. }));
        prop_assert!(is_fallback);
    }

    #[test]
    fn prop_every_turn_speaks(request in arb_request(), lookup_ok in any::<bool>()) {
        let result = finish(plan(&request), lookup_ok);
        prop_assert!(!result.speech_text.is_empty());
    }

    #[test]
    fn prop_only_clear_session_ends(request in arb_request(), lookup_ok in any::<bool>()) {
        let clears = matches!(
            IntentRegistry::standard().classify(&request.intent_name),
            Intent::Known(IntentKind::ClearSession)
        );
        let result = finish(plan(&request), lookup_ok);

        prop_assert_eq!(result.end_session, clears);
    }
}
