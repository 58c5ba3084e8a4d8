//! HTTP surface of the relay
//!
//! One forwarding endpoint plus a liveness check. No state survives a
//! request.

mod handlers;
mod types;


pub use handlers::create_router;
pub use types::*;

use crate::llm::ModelService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelService>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self { model }
    }
}
