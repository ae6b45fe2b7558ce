use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
///
/// Every failure a request can end in maps onto one of these variants, and
/// they are converted to an HTTP response in exactly one place
/// (`IntoResponse` below).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The client-supplied body failed validation (malformed JSON, missing or
    /// empty text).
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider call reported success but no audio file materialized.
    #[error("Failed to generate audio file")]
    GenerationFailure,

    /// The provider produced a zero-byte audio file.
    #[error("Generated audio file is empty")]
    EmptyResult,

    /// Any other provider or filesystem failure, with a coarse classification
    /// of what went wrong.
    #[error("{message}")]
    Provider { kind: String, message: String },
}

/// Error response structure returned to clients: always an `error` message,
/// plus a `type` classification for provider failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::GenerationFailure | Self::EmptyResult | Self::Provider { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the wire error payload
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            kind: match self {
                Self::Provider { kind, .. } => Some(kind.clone()),
                _ => None,
            },
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
