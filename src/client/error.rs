//! Error types for the chat backend client.

use thiserror::Error;

/// Failure of a single request/response cycle against the chat backend.
///
/// The widget surfaces every variant the same way (one fallback bubble);
/// the distinction only matters for diagnostics.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection refused, reset, timed out, etc.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if it could be read.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, ClientError>;
