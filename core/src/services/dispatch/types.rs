//! Types for dispatch service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::RequestType;

/// Deposit pushed by the upstream system.
///
/// Fields are optional so presence is checked by the service rather than by
/// the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepositRequest {
    /// Request type wire name
    pub tur: Option<String>,
    /// The 4-digit code
    pub otp: Option<String>,
    /// Subscriber phone, `+` prefixed
    pub tel: Option<String>,
}

impl DepositRequest {
    pub fn new(tur: &str, otp: &str, tel: &str) -> Self {
        Self {
            tur: Some(tur.to_string()),
            otp: Some(otp.to_string()),
            tel: Some(tel.to_string()),
        }
    }
}

/// Result of a successful deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositReceipt {
    /// Canonical phone the code is stored under
    pub phone: String,
    pub request_type: RequestType,
    pub timestamp: DateTime<Utc>,
}

/// Why an inbound message was not answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    MissingSender,
    NoIntent,
}

/// Outcome of the reply send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Delivery {
    Delivered { message_id: String },
    Failed { reason: String },
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered { .. })
    }
}

/// Result of handling one inbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InboundOutcome {
    /// No reply was sent
    Ignored { reason: IgnoreReason },
    /// A reply was attempted
    Replied {
        request_type: RequestType,
        code_found: bool,
        delivery: Delivery,
    },
}
