/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type for the BookStack client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the client and the parse helpers
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure: connection, TLS, timeout or request construction
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reported by the API inside the error envelope
    #[error("api error {code}: {message}")]
    Api {
        /// Error code sent by the API, usually the HTTP status
        code: i64,
        /// Human readable message sent by the API
        message: String,
    },

    /// Non-success status without an error object in the body
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// Malformed JSON where an envelope or entity was expected
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The form encoder could not produce a body
    #[error("form error: {0}")]
    Form(String),

    /// I/O failure while preparing a request body
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Arguments rejected before any request was made
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration that cannot be turned into a client
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Builds an [`AppError::Api`] from an envelope error
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Returns true when the API reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Api { code, .. } => *code == 404,
            AppError::Unexpected(status) => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}
