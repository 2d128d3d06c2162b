//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration or output (de)serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
