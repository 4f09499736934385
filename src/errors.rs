//! # Admin Errors
//!
//! Error types shared by the catalogue, CSRF guard and HTTP routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin service errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Page number outside the catalogue, or a zero page size
    #[error("Invalid page: {0}")]
    InvalidPage(usize),

    /// Node id not present in the catalogue
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// User id not attached to any node
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Missing, malformed or forged CSRF token
    #[error("CSRF verification failed")]
    CsrfRejected,

    /// Spam form body could not be interpreted
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Node fixture could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl AdminError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::InvalidPage(_) => StatusCode::NOT_FOUND,
            AdminError::NodeNotFound(_) => StatusCode::NOT_FOUND,
            AdminError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AdminError::CsrfRejected => StatusCode::FORBIDDEN,
            AdminError::InvalidSubmission(_) => StatusCode::BAD_REQUEST,
            AdminError::Config(_) | AdminError::Fixture(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<AdminError> for ErrorResponse {
    fn from(err: AdminError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AdminError::InvalidPage(9).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AdminError::CsrfRejected.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AdminError::InvalidSubmission("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AdminError::Config("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(AdminError::NodeNotFound("abc12".into()));
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Node not found: abc12");
    }
}
