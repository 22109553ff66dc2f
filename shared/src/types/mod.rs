//! Type definitions shared by the HTTP surface
//!
//! - `response` - health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};
