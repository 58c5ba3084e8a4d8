//! IDCARE chat
//!
//! A conversation controller for a locally hosted language model, and the
//! stateless relay that sits between it and the model service.

pub mod api;
pub mod config;
pub mod llm;
pub mod runtime;
pub mod state_machine;
