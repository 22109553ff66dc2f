//! Validation errors raised on the deposit path
//!
//! Each variant knows which request field it concerns and carries a machine
//! readable code so the HTTP layer can map it to a 4xx response without
//! matching on message text.

use relay_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid request type: {value}")]
    InvalidRequestType { value: String },

    #[error("Phone number must start with '+'")]
    PhoneMissingPlus,

    #[error("OTP must be exactly {expected} digits")]
    MalformedOtp { expected: usize },
}

impl ValidationError {
    /// Name of the request field the error refers to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field } => field,
            ValidationError::InvalidRequestType { .. } => "tur",
            ValidationError::PhoneMissingPlus => "tel",
            ValidationError::MalformedOtp { .. } => "otp",
        }
    }

    /// Human-readable reason
    pub fn reason(&self) -> String {
        self.to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => error_codes::MISSING_FIELD,
            ValidationError::InvalidRequestType { .. } => error_codes::INVALID_REQUEST_TYPE,
            ValidationError::PhoneMissingPlus => error_codes::PHONE_INVALID,
            ValidationError::MalformedOtp { .. } => error_codes::OTP_INVALID,
        }
    }
}

impl IntoErrorResponse for ValidationError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.reason()).with_field(self.field());
        match self {
            ValidationError::MalformedOtp { expected } => response.add_detail("expected_length", expected),
            ValidationError::InvalidRequestType { value } => response.add_detail("value", value),
            _ => response,
        }
    }
}
