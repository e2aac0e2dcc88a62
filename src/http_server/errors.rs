//! # API Errors
//!
//! Error types for the HTTP layer.
//!
//! The three caller-visible outcomes stay distinguishable on the wire:
//! invalid input is 400, a missing id is 404, and anything unexpected is
//! 500. A well-formed filter that matches nothing is not an error at all;
//! it answers 200 with an empty list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP layer errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required path parameter was empty after trimming
    #[error("Query parameter '{0}' must not be blank")]
    BlankParam(&'static str),

    /// The track segment did not name a known track
    #[error("Unknown track: '{0}'")]
    UnknownTrack(String),

    /// No employee with the requested id
    #[error("No employee with id '{0}'")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BlankParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownTrack(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
