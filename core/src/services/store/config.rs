//! Configuration for the OTP store and its sweeper

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_TTL_MINUTES;

/// Configuration for the OTP store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpStoreConfig {
    /// Seconds a deposited code stays claimable
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,
}

impl Default for OtpStoreConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl OtpStoreConfig {
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds)
    }
}

/// Configuration for the background sweeper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweeperConfig {
    /// How often to sweep expired entries (in seconds)
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
    /// Whether to run the background sweep at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
            enabled: default_enabled(),
        }
    }
}

fn default_ttl_seconds() -> i64 {
    DEFAULT_TTL_MINUTES * 60
}

fn default_interval_seconds() -> u64 {
    60
}

fn default_enabled() -> bool {
    true
}
