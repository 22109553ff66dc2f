//! # OTP Relay Core
//!
//! Core business logic for the OTP relay backend. This crate contains the
//! domain entities, the phone identity normalizer, the intent classifier, the
//! in-memory OTP store with its sweeper, and the dispatch orchestrator that
//! composes them.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
