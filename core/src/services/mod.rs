//! Business services containing the relay logic.

pub mod dispatch;
pub mod identity;
pub mod intent;
pub mod store;

// Re-export commonly used types
pub use dispatch::{
    ChannelSender, DepositReceipt, DepositRequest, Delivery, DispatchConfig, DispatchService,
    IgnoreReason, InboundOutcome,
};
pub use identity::{NormalizerConfig, PhoneNormalizer, PhoneVariants, RegionRule};
pub use intent::{IntentClassifier, IntentKeywords};
pub use store::{OtpStore, OtpStoreConfig, OtpSweeper, PoolEntrySnapshot, SweepResult, SweeperConfig};
