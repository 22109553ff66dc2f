//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the OTP relay. It
//! provides the concrete outbound channels the dispatch service replies
//! through, and the guard that drops duplicate inbound pushes.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Channel**: mock and HTTP webhook implementations of
//!   [`relay_core::services::ChannelSender`]
//! - **Dedup**: bounded memory of recently seen inbound messages

use relay_core::errors::DomainError;

/// Channel module - outbound messaging providers
pub mod channel;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services
    //!
    //! Handles:
    //! - Outbound channel provider selection and credentials
    //! - Inbound deduplication bounds

    use serde::{Deserialize, Serialize};

    /// Outbound channel configuration
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ChannelConfig {
        /// Channel provider ("mock", "webhook")
        #[serde(default = "default_provider")]
        pub provider: String,
        /// Endpoint the webhook channel posts replies to
        #[serde(default)]
        pub webhook_url: Option<String>,
        /// Bearer token sent with webhook requests
        #[serde(default)]
        pub auth_token: Option<String>,
        /// Timeout for webhook requests in seconds
        #[serde(default = "default_timeout_secs")]
        pub timeout_secs: u64,
    }

    impl Default for ChannelConfig {
        fn default() -> Self {
            Self {
                provider: default_provider(),
                webhook_url: None,
                auth_token: None,
                timeout_secs: default_timeout_secs(),
            }
        }
    }

    /// Inbound deduplication configuration
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DedupConfig {
        /// Number of remembered messages that triggers trimming
        #[serde(default = "default_capacity")]
        pub capacity: usize,
        /// Number of most recent messages kept after trimming
        #[serde(default = "default_retain")]
        pub retain: usize,
    }

    impl Default for DedupConfig {
        fn default() -> Self {
            Self {
                capacity: default_capacity(),
                retain: default_retain(),
            }
        }
    }

    fn default_provider() -> String {
        "mock".to_string()
    }

    fn default_timeout_secs() -> u64 {
        10
    }

    fn default_capacity() -> usize {
        500
    }

    fn default_retain() -> usize {
        250
    }
}

pub use channel::{create_channel, InboundDeduplicator, MockChannel, WebhookChannel};
pub use config::{ChannelConfig, DedupConfig};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Channel provider error
    #[error("Channel error: {0}")]
    Channel(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::channel(err.to_string())
    }
}
