//! Deposit endpoint bodies
//!
//! The request body is [`relay_core::services::DepositRequest`] itself.

use chrono::{DateTime, Utc};
use relay_core::domain::entities::RequestType;
use relay_core::services::DepositReceipt;
use serde::{Deserialize, Serialize};

/// Response body for a stored deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositResponse {
    pub message: String,
    /// Canonical phone the code was stored under
    pub phone: String,
    pub tur: RequestType,
    pub timestamp: DateTime<Utc>,
}

impl From<DepositReceipt> for DepositResponse {
    fn from(receipt: DepositReceipt) -> Self {
        Self {
            message: "OTP başarıyla kaydedildi".to_string(),
            phone: receipt.phone,
            tur: receipt.request_type,
            timestamp: receipt.timestamp,
        }
    }
}
