//! Runtime for executing conversations
//!
//! Owns the live conversation state and connects the pure state machine to
//! the relay.

mod executor;
mod http_client;
pub mod traits;


pub use executor::ConversationRuntime;
pub use http_client::HttpRelayClient;
pub use traits::*;

use crate::state_machine::{ConvContext, ConvState, Event};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Handle to interact with a running conversation
#[derive(Clone)]
pub struct ConversationHandle {
    event_tx: mpsc::Sender<Event>,
    state_rx: watch::Receiver<ConvState>,
}

/// Start a conversation runtime in the background
pub fn spawn_conversation<C>(context: ConvContext, relay: C) -> ConversationHandle
where
    C: RelayClient + 'static,
{
    let (event_tx, event_rx) = mpsc::channel(32);
    let (state_tx, state_rx) = watch::channel(ConvState::new());

    let runtime = ConversationRuntime::new(context, relay, event_rx, event_tx.downgrade(), state_tx);
    tokio::spawn(runtime.run());

    ConversationHandle { event_tx, state_rx }
}

impl ConversationHandle {
    /// Submit user input. Ignored while a reply is pending or when blank.
    pub async fn submit(&self, text: impl Into<String>) -> Result<(), String> {
        self.send_event(Event::submit(text)).await
    }

    /// Empty the conversation log and banner
    pub async fn clear(&self) -> Result<(), String> {
        self.send_event(Event::UserClear).await
    }

    /// Replace the contents of the input box
    pub async fn set_input(&self, text: impl Into<String>) -> Result<(), String> {
        self.send_event(Event::InputChanged { text: text.into() }).await
    }

    async fn send_event(&self, event: Event) -> Result<(), String> {
        self.event_tx
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {e}"))
    }

    /// Snapshot of the latest published state
    pub fn state(&self) -> ConvState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state updates
    pub fn subscribe(&self) -> watch::Receiver<ConvState> {
        self.state_rx.clone()
    }

    /// Wait until the state satisfies `predicate`, giving up after `timeout`
    pub async fn wait_until(
        &self,
        timeout: Duration,
        predicate: impl FnMut(&ConvState) -> bool,
    ) -> Option<ConvState> {
        let mut rx = self.state_rx.clone();
        let state = match tokio::time::timeout(timeout, rx.wait_for(predicate)).await {
            Ok(Ok(state)) => Some((*state).clone()),
            _ => None,
        };
        state
    }
}
