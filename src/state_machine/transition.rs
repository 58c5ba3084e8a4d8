//! Pure state transition function

use super::provenance::{is_provenance_query, IDENTITY_REPLY};
use super::state::Turn;
use super::{ConvContext, ConvState, Effect, Event};
use thiserror::Error;

/// Shown when the relay answered but without `message.content`
pub const FALLBACK_REPLY: &str = "I received your message but couldn't process it properly.";

/// Error turn appended when the relay could not be reached or answered badly
pub const CONNECTION_APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Banner text set alongside the error turn
pub const CONNECTION_BANNER: &str = "Failed to connect to the server. Please try again.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Reasons an event is refused. Callers treat these as silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A reply is still pending")]
    AwaitingReply,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs and performs
/// no I/O. Timestamps arrive inside the events.
pub fn transition(
    state: &ConvState,
    context: &ConvContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match event {
        Event::InputChanged { text } => {
            let mut next = state.clone();
            next.pending_input = text;
            Ok(TransitionResult::new(next).with_effect(Effect::NotifyClient))
        }

        Event::UserSubmit { text, .. } if !state.can_submit(&text) => {
            if state.awaiting_reply {
                Err(TransitionError::AwaitingReply)
            } else {
                Err(TransitionError::EmptyMessage)
            }
        }

        Event::UserSubmit { text, at } => {
            let follow_up = if is_provenance_query(&text) {
                Effect::ScheduleCannedReply {
                    delay: context.thinking_delay,
                }
            } else {
                Effect::dispatch(text.trim())
            };

            let mut next = state.clone();
            // Stored verbatim; only the dispatched copy is trimmed
            next.turns.push(Turn::user(text, at));
            next.pending_input.clear();
            next.awaiting_reply = true;
            next.last_error = None;

            Ok(TransitionResult::new(next)
                .with_effect(Effect::NotifyClient)
                .with_effect(follow_up))
        }

        // Does not touch awaiting_reply: an in-flight reply still lands
        Event::UserClear => {
            let mut next = state.clone();
            next.turns.clear();
            next.last_error = None;
            Ok(TransitionResult::new(next).with_effect(Effect::NotifyClient))
        }

        Event::CannedReplyDue { .. }
        | Event::RelayReplied { .. }
        | Event::RelayFailed { .. }
            if !state.awaiting_reply =>
        {
            Err(TransitionError::InvalidTransition(
                "reply arrived with nothing pending".to_string(),
            ))
        }

        Event::CannedReplyDue { at } => Ok(resolve(state, Turn::assistant(IDENTITY_REPLY, at))),

        Event::RelayReplied { content, at } => {
            let content = content
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| FALLBACK_REPLY.to_string());
            Ok(resolve(state, Turn::assistant(content, at)))
        }

        Event::RelayFailed { at, .. } => {
            let mut result = resolve(state, Turn::assistant_error(CONNECTION_APOLOGY, at));
            result.new_state.last_error = Some(CONNECTION_BANNER.to_string());
            Ok(result)
        }
    }
}

/// Append the assistant turn and release the single-flight gate
fn resolve(state: &ConvState, turn: Turn) -> TransitionResult {
    let mut next = state.clone();
    next.turns.push(turn);
    next.awaiting_reply = false;
    TransitionResult::new(next).with_effect(Effect::NotifyClient)
}
