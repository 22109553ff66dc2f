//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Channel delivery failed: {message}")]
    Channel { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    pub fn channel(message: impl Into<String>) -> Self {
        DomainError::Channel {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
