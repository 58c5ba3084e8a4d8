//! Effects produced by state transitions

use std::time::Duration;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the (trimmed) user text to the relay
    DispatchRelay { message: String },

    /// Deliver the canned identity reply after `delay`
    ScheduleCannedReply { delay: Duration },

    /// Publish the new state to observers
    NotifyClient,
}

impl Effect {
    pub fn dispatch(message: impl Into<String>) -> Self {
        Effect::DispatchRelay {
            message: message.into(),
        }
    }
}
