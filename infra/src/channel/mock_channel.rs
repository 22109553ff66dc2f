//! Mock channel for development and testing
//!
//! Messages are logged and kept in memory instead of being delivered.

use async_trait::async_trait;
use relay_core::errors::DomainError;
use relay_core::services::ChannelSender;
use relay_shared::phone::mask_phone_number;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::info;

use crate::InfrastructureError;

/// A message captured by [`MockChannel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub text: String,
}

/// Channel that records messages instead of sending them
pub struct MockChannel {
    messages: Mutex<Vec<SentMessage>>,
    counter: AtomicUsize,
    ready: AtomicBool,
    simulate_failure: AtomicBool,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(ready: bool, simulate_failure: bool) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
            ready: AtomicBool::new(ready),
            simulate_failure: AtomicBool::new(simulate_failure),
        }
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn get_message_count(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn deliver(&self, identity: &str, text: &str) -> Result<String, InfrastructureError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(InfrastructureError::Channel(
                "Simulated channel failure".to_string(),
            ));
        }
        if !self.ready.load(Ordering::SeqCst) {
            return Err(InfrastructureError::Channel("Channel not ready".to_string()));
        }

        info!(
            to = %mask_phone_number(identity),
            length = text.chars().count(),
            "[MOCK CHANNEL] message accepted"
        );

        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SentMessage {
                to: identity.to_string(),
                text: text.to_string(),
            });
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock_{}", n))
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelSender for MockChannel {
    async fn send_text(&self, identity: &str, text: &str) -> Result<String, DomainError> {
        Ok(self.deliver(identity, text)?)
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst) && !self.simulate_failure.load(Ordering::SeqCst)
    }
}
