//! Channel Module
//!
//! This module provides the outbound channels the relay replies through and
//! the inbound deduplication guard.
//!
//! ## Features
//!
//! - **Mock Implementation**: records messages for development and tests
//! - **Webhook Support**: posts replies to an HTTP gateway
//! - **Deduplication**: drops repeated inbound pushes within the same minute
//! - **Security**: phone number masking in logs

use std::sync::Arc;

use relay_core::services::ChannelSender;

pub mod dedup;
pub mod mock_channel;
pub mod webhook;

pub use dedup::InboundDeduplicator;
pub use mock_channel::MockChannel;
pub use webhook::WebhookChannel;

#[cfg(test)]
mod tests;

/// Create an outbound channel based on configuration
///
/// Unknown providers, and a webhook provider that fails to initialize, fall
/// back to the mock channel.
pub fn create_channel(config: &crate::config::ChannelConfig) -> Arc<dyn ChannelSender> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockChannel::new()),
        "webhook" => match WebhookChannel::new(config) {
            Ok(channel) => Arc::new(channel),
            Err(e) => {
                tracing::error!("Failed to initialize webhook channel: {}", e);
                tracing::warn!("Falling back to mock channel");
                Arc::new(MockChannel::new())
            }
        },
        _ => {
            tracing::warn!(
                "Unknown channel provider '{}', using mock implementation",
                config.provider
            );
            Arc::new(MockChannel::new())
        }
    }
}
