//! Error mapping shared by the route handlers

pub mod error;

pub use error::{json_error_handler, ApiError};
