//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::InvalidRangeError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (malformed query string)
    BadRequest(String),
    /// Payload range with inverted or NaN bounds
    InvalidRange(InvalidRangeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::InvalidRange(e) => {
                let details = match e {
                    InvalidRangeError::Inverted { low, high }
                    | InvalidRangeError::NotANumber { low, high } => {
                        format!("low={}, high={}", low, high)
                    }
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_RANGE", e.to_string()).with_details(details),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<InvalidRangeError> for AppError {
    fn from(err: InvalidRangeError) -> Self {
        AppError::InvalidRange(err)
    }
}
