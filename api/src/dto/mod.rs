//! Request and response bodies for the HTTP endpoints

pub mod inbound;
pub mod otp;
pub mod status;

pub use inbound::{InboundBody, InboundResponse};
pub use otp::DepositResponse;
pub use status::{PoolEntryDto, PoolResponse, StatusResponse};
