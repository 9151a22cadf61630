//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// Liveness payload served at the root path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse<T> {
    pub success: bool,
    pub deleted: T,
}

impl<T> DeletedResponse<T> {
    pub fn new(deleted: T) -> Self {
        Self {
            success: true,
            deleted,
        }
    }
}

/// JSON error body shared by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: u16,

    /// A short summary of the problem type.
    pub error: String,

    /// A human-readable explanation specific to this occurrence.
    pub message: String,
}

impl ErrorResponse {
    /// New error whose message defaults to its summary.
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            status,
            message: error.clone(),
            error,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_message(message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, "Unauthorized").with_message(message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, "Forbidden").with_message(message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_message(message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, "Conflict").with_message(message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
