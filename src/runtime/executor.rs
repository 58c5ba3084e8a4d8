//! Conversation runtime executor

use super::traits::RelayClient;
use crate::state_machine::{transition, ConvContext, ConvState, Effect, Event};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Drives one conversation: applies events to the state machine and runs
/// the resulting effects.
///
/// Events are handled one at a time. Relay calls and the thinking delay run
/// as spawned tasks that report back through the event channel, so clearing
/// or editing input is never blocked by a pending reply.
pub struct ConversationRuntime<C>
where
    C: RelayClient + 'static,
{
    context: ConvContext,
    state: ConvState,
    relay: Arc<C>,
    event_rx: mpsc::Receiver<Event>,
    /// Weak so the loop ends once every handle is dropped and no reply is pending
    event_tx: mpsc::WeakSender<Event>,
    state_tx: watch::Sender<ConvState>,
}

impl<C> ConversationRuntime<C>
where
    C: RelayClient + 'static,
{
    pub fn new(
        context: ConvContext,
        relay: C,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::WeakSender<Event>,
        state_tx: watch::Sender<ConvState>,
    ) -> Self {
        Self {
            context,
            state: ConvState::new(),
            relay: Arc::new(relay),
            event_rx,
            event_tx,
            state_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::debug!("Starting conversation runtime");

        while let Some(event) = self.event_rx.recv().await {
            self.process_event(event);
        }

        tracing::debug!("Conversation runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        let result = match transition(&self.state, &self.context, event) {
            Ok(r) => r,
            Err(e) => {
                // Busy or blank submissions are ignored without surfacing anything
                tracing::debug!(reason = %e, "Event ignored");
                return;
            }
        };

        self.state = result.new_state;

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::NotifyClient => {
                self.state_tx.send_replace(self.state.clone());
            }

            Effect::DispatchRelay { message } => {
                let Some(event_tx) = self.event_tx.upgrade() else {
                    tracing::warn!("Conversation closed, dropping relay request");
                    return;
                };
                let relay = self.relay.clone();
                tokio::spawn(async move {
                    tracing::debug!(chars = message.chars().count(), "Sending message to relay");
                    // Run the call in its own task so a panic still resolves the gate
                    let call = tokio::spawn(async move { relay.send(&message).await });
                    let event = match call.await {
                        Ok(Ok(content)) => Event::RelayReplied {
                            content,
                            at: Utc::now(),
                        },
                        Ok(Err(e)) => {
                            tracing::warn!(error = %e, "Relay request failed");
                            Event::RelayFailed {
                                message: e.to_string(),
                                at: Utc::now(),
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Relay task aborted");
                            Event::RelayFailed {
                                message: e.to_string(),
                                at: Utc::now(),
                            }
                        }
                    };
                    let _ = event_tx.send(event).await;
                });
            }

            Effect::ScheduleCannedReply { delay } => {
                let Some(event_tx) = self.event_tx.upgrade() else {
                    return;
                };
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = event_tx.send(Event::CannedReplyDue { at: Utc::now() }).await;
                });
            }
        }
    }
}
