//! # API Errors
//!
//! Error types for the HTTP layer. Internal failures are logged here and
//! surface to the caller only as a fixed per-route message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::registry::RegistryError;

use super::response::ApiResponse;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required fields missing from the request
    #[error("{0}")]
    Validation(String),

    /// Body is not valid JSON for the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string parameter could not be interpreted
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(&'static str),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; only `message` is returned to the caller
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: RegistryError,
    },
}

impl ApiError {
    /// Wrap a store failure, logging the cause.
    pub fn internal(message: &'static str, source: RegistryError) -> Self {
        tracing::error!(error = %source, "{}", message);
        ApiError::Internal { message, source }
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound("User not found")
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}
