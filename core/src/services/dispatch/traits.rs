//! Trait for outbound channel integration

use async_trait::async_trait;

use crate::errors::DomainError;

/// Outbound messaging channel the relay replies through
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// Send `text` to the subscriber identified by `identity`.
    ///
    /// Returns the provider's message id. Delivery is best-effort; callers do
    /// not retry.
    async fn send_text(&self, identity: &str, text: &str) -> Result<String, DomainError>;

    /// Whether the channel is connected and able to send
    fn is_ready(&self) -> bool;
}
