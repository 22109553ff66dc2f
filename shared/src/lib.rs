//! Shared utilities and common types for the OTP relay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, logging, HTTP server)
//! - Error response structures and error codes
//! - Utility functions (phone masking, digit extraction, code validation)
//! - Health check responses

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use types::{HealthResponse, HealthStatus};
pub use utils::{phone, validation};
