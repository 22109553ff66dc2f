//! # OTP Relay API
//!
//! HTTP surface of the relay: the deposit endpoint used by the upstream
//! system, the inbound endpoint the messaging gateway pushes to, and the
//! status endpoints.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
pub use config::AppConfig;
