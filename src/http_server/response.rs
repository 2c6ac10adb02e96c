//! # Response Envelope
//!
//! Every JSON body carries `success`, and optionally `data`, `total`
//! (for sequences) and `message`.

use serde::Serialize;

/// Uniform response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful single-value response
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Successful sequence response; `total` is the returned length
    pub fn list(data: Vec<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            total: Some(data.len()),
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            total: None,
            message: Some(message.into()),
        }
    }

    /// Failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            total: None,
            message: Some(message.into()),
        }
    }
}
