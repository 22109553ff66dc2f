use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use relay_core::errors::DomainError;
use relay_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Errors returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(DomainError::Validation(e)) => e.to_error_response(),
            ApiError::Domain(DomainError::Channel { message }) => {
                ErrorResponse::new(error_codes::CHANNEL_ERROR, message.clone())
            }
            ApiError::BadRequest(message) => ErrorResponse::new(error_codes::BAD_REQUEST, message.clone()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Channel { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }
        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// Turn unparsable or oversized JSON bodies into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        other => format!("Invalid JSON: {}", other),
    };
    ApiError::BadRequest(message).into()
}
