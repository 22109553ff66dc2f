//! Dispatch orchestrator
//!
//! This module composes the relay workflow:
//! - Deposit validation and storage of codes pushed by the upstream system
//! - Inbound message classification, claim and reply through the channel

mod config;
mod messages;
mod service;
mod traits;
mod types;


pub use config::DispatchConfig;
pub use messages::{code_found_reply, code_missing_reply};
pub use service::DispatchService;
pub use traits::ChannelSender;
pub use types::{DepositReceipt, DepositRequest, Delivery, IgnoreReason, InboundOutcome};
