//! Status and pool introspection bodies

use chrono::{DateTime, Utc};
use relay_core::domain::entities::RequestType;
use relay_core::services::PoolEntrySnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub channel_ready: bool,
    pub active_otps: usize,
    pub timestamp: DateTime<Utc>,
}

/// One pooled entry; `otp` is redacted to its first two digits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolEntryDto {
    pub phone: String,
    pub tur: RequestType,
    pub otp: String,
    pub age_minutes: f64,
}

impl From<PoolEntrySnapshot> for PoolEntryDto {
    fn from(entry: PoolEntrySnapshot) -> Self {
        Self {
            phone: entry.phone,
            tur: entry.request_type,
            otp: entry.code,
            age_minutes: entry.age_seconds as f64 / 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolResponse {
    pub pool_count: usize,
    pub entries: Vec<PoolEntryDto>,
    pub timestamp: DateTime<Utc>,
}
