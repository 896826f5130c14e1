//! Error types for ContinuITy frontend requests.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::RestClient`] implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The frontend answered with a non-success status code.
    #[error("HTTP {status} ({reason}): {body}")]
    Status { status: u16, reason: String, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON object.
    #[error("Invalid JSON response from {path}: {message}")]
    Decode { path: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("Could not create the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The blocking bridge could not drive the request.
    #[error("Could not run request: {0}")]
    Runtime(#[source] anyhow::Error),
}

impl ApiError {
    /// Build a status error, deriving the reason phrase from the code.
    ///
    /// ```rust
    /// use continuity_api::ApiError;
    ///
    /// let error = ApiError::status(503, "try later");
    /// assert_eq!(error.to_string(), "HTTP 503 (Service Unavailable): try later");
    /// ```
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();
        ApiError::Status {
            status,
            reason,
            body: body.into(),
        }
    }
}
