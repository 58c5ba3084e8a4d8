//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::provenance::{is_provenance_query, IDENTITY_REPLY};
use super::state::*;
use super::transition::*;
use super::*;
use chrono::Utc;
use proptest::prelude::*;
use std::time::Duration;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> ConvContext {
    ConvContext::new(Duration::from_millis(10))
}

fn is_dispatch(effect: &Effect) -> bool {
    matches!(effect, Effect::DispatchRelay { .. })
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_turn() -> impl Strategy<Value = Turn> {
    (any::<bool>(), "[a-zA-Z ]{1,30}", any::<bool>()).prop_map(|(user, content, is_error)| {
        if user {
            Turn::user(content, Utc::now())
        } else if is_error {
            Turn::assistant_error(content, Utc::now())
        } else {
            Turn::assistant(content, Utc::now())
        }
    })
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    (
        proptest::collection::vec(arb_turn(), 0..6),
        "[a-z ]{0,10}",
        any::<bool>(),
        proptest::option::of("[a-zA-Z ]{1,20}"),
    )
        .prop_map(
            |(turns, pending_input, awaiting_reply, last_error)| ConvState {
                turns,
                pending_input,
                awaiting_reply,
                last_error,
            },
        )
}

fn arb_phrase_message() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z ]{0,15}",
        0..provenance::PROVENANCE_PHRASES.len(),
        "[a-zA-Z ?!]{0,15}",
    )
        .prop_map(|(prefix, idx, suffix)| {
            format!("{prefix}{}{suffix}", provenance::PROVENANCE_PHRASES[idx].to_uppercase())
        })
}

fn arb_resolution() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::CannedReplyDue { at: Utc::now() }),
        proptest::option::of("[a-zA-Z ]{0,20}").prop_map(|content| Event::RelayReplied {
            content,
            at: Utc::now(),
        }),
        "[a-z ]{1,20}".prop_map(|message| Event::RelayFailed {
            message,
            at: Utc::now(),
        }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Provenance questions are answered locally with exactly one fixed turn
    #[test]
    fn prop_provenance_never_dispatches(message in arb_phrase_message()) {
        prop_assume!(!message.trim().is_empty());
        let ctx = test_context();

        let submitted = transition(&ConvState::new(), &ctx, Event::submit(message.clone())).unwrap();
        prop_assert!(!submitted.effects.iter().any(is_dispatch));

        let done = transition(
            &submitted.new_state,
            &ctx,
            Event::CannedReplyDue { at: Utc::now() },
        ).unwrap();
        let turns = &done.new_state.turns;
        prop_assert_eq!(turns.len(), 2);
        prop_assert_eq!(&turns[0].content, &message);
        prop_assert_eq!(turns[1].content.as_str(), IDENTITY_REPLY);
        prop_assert!(!done.new_state.awaiting_reply);
    }

    /// Other text goes to the relay, trimmed
    #[test]
    fn prop_other_text_dispatches_trimmed(message in "[ ]{0,3}[a-z]{1,12}( [a-z]{1,8}){0,3}[ ]{0,3}") {
        prop_assume!(!is_provenance_query(&message));
        let result = transition(&ConvState::new(), &test_context(), Event::submit(message.clone())).unwrap();
        prop_assert!(result.effects.contains(&Effect::dispatch(message.trim())));
    }

    /// Submissions while busy or blank change nothing
    #[test]
    fn prop_rejected_submit_is_noop(state in arb_state(), text in "[ \t\n]{0,5}|[a-z]{1,10}") {
        let accepted = transition(&state, &test_context(), Event::submit(text.clone()));
        if state.awaiting_reply || text.trim().is_empty() {
            prop_assert!(accepted.is_err());
        } else {
            let next = accepted.unwrap().new_state;
            prop_assert_eq!(next.turns.len(), state.turns.len() + 1);
            prop_assert!(next.awaiting_reply);
        }
    }

    /// Clear always empties the log and the banner, and leaves the gate alone
    #[test]
    fn prop_clear_always_empties(state in arb_state()) {
        let next = transition(&state, &test_context(), Event::UserClear).unwrap().new_state;
        prop_assert!(next.turns.is_empty());
        prop_assert!(next.last_error.is_none());
        prop_assert_eq!(next.awaiting_reply, state.awaiting_reply);
    }

    /// Every resolution releases the gate and appends exactly one assistant turn
    #[test]
    fn prop_resolution_releases_gate(state in arb_state(), event in arb_resolution()) {
        let state = ConvState { awaiting_reply: true, ..state };
        let next = transition(&state, &test_context(), event.clone()).unwrap().new_state;

        prop_assert!(!next.awaiting_reply);
        prop_assert_eq!(next.turns.len(), state.turns.len() + 1);
        prop_assert_eq!(&next.turns[..state.turns.len()], &state.turns[..]);

        let last = next.turns.last().unwrap();
        prop_assert_eq!(last.role, Role::Assistant);
        match event {
            Event::RelayFailed { .. } => {
                prop_assert!(last.is_error);
                prop_assert_eq!(last.content.as_str(), CONNECTION_APOLOGY);
                prop_assert_eq!(next.last_error.as_deref(), Some(CONNECTION_BANNER));
            }
            Event::RelayReplied { content, .. } => {
                prop_assert!(!last.is_error);
                let expected = content.filter(|c| !c.is_empty()).unwrap_or_else(|| FALLBACK_REPLY.to_string());
                prop_assert_eq!(&last.content, &expected);
            }
            _ => {
                prop_assert_eq!(last.content.as_str(), IDENTITY_REPLY);
            }
        }
    }

    /// Turns only grow outside of clear
    #[test]
    fn prop_turns_append_only(
        state in arb_state(),
        events in proptest::collection::vec(
            prop_oneof![
                "[a-z ]{0,10}".prop_map(|text: String| Event::submit(text)),
                "[a-z]{0,5}".prop_map(|text| Event::InputChanged { text }),
                arb_resolution(),
            ],
            0..10,
        ),
    ) {
        let ctx = test_context();
        let mut current = state;
        for event in events {
            if let Ok(result) = transition(&current, &ctx, event) {
                prop_assert!(result.new_state.turns.len() >= current.turns.len());
                prop_assert_eq!(&result.new_state.turns[..current.turns.len()], &current.turns[..]);
                current = result.new_state;
            }
        }
    }
}
