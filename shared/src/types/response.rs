//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }

    /// Same response reporting a different status
    pub fn with_status(mut self, status: HealthStatus) -> Self {
        self.status = status;
        self
    }
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Serving, but a dependency such as the outbound channel is down
    Degraded,
}
