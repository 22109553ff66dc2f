//! OTP pool
//!
//! This module holds deposited codes until a subscriber claims them:
//! - Storage under a canonical phone identity
//! - Claim-once retrieval across every phone spelling
//! - TTL expiry, lazily on claim and periodically via the sweeper

mod config;
mod otp_store;
mod sweeper;

#[cfg(test)]
mod tests;

pub use config::{OtpStoreConfig, SweeperConfig};
pub use otp_store::{OtpStore, PoolEntrySnapshot};
pub use sweeper::{OtpSweeper, SweepResult};
