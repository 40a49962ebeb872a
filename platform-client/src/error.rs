//! Client error types

use http::StatusCode;
use shared::error::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a structured API error
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success status and its body to an error
    pub(crate) fn from_status(status: StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ErrorBody>(&text) {
            return ClientError::Api {
                code: api_err.code,
                message: api_err.message,
            };
        }
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
