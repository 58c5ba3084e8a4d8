//! Core conversation state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
pub mod provenance;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use provenance::{is_provenance_query, IDENTITY_REPLY};
pub use state::{ConvContext, ConvState, Role, Turn};
pub use transition::{
    transition, TransitionError, CONNECTION_APOLOGY, CONNECTION_BANNER, FALLBACK_REPLY,
};

/// Starter prompts offered on an empty conversation
pub const SUGGESTED_PROMPTS: &[&str] = &["Who made you?"];
