//! Error handling - every failure becomes an `ErrorResponse` JSON body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::DomainError;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    Conflict(String),
    /// Server setup is incomplete; the message is safe to show.
    Misconfigured(String),
    Internal(String),
    Upstream(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Misconfigured(msg) => write!(f, "Misconfigured: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Misconfigured(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(msg) => ErrorResponse::not_found(msg),
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            AppError::Unauthorized => {
                ErrorResponse::unauthorized("Missing admin key header.")
            }
            AppError::Forbidden => ErrorResponse::forbidden("Invalid admin key."),
            AppError::Conflict(msg) => ErrorResponse::conflict(msg),
            AppError::Misconfigured(msg) => {
                tracing::error!("Misconfiguration: {}", msg);
                ErrorResponse::internal_error().with_message(msg)
            }
            AppError::Internal(msg) => {
                // Log internal errors
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::internal_error()
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                ErrorResponse::new(502, "Bad Gateway")
                    .with_message("The text generation service failed.")
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            e @ DomainError::NotFound { .. } => AppError::NotFound(e.to_string()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Misconfigured(msg) => AppError::Misconfigured(msg),
            DomainError::Storage(e) => AppError::Internal(e.to_string()),
            DomainError::Upstream(e) => AppError::Upstream(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
