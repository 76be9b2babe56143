//! Error types for the Drive tree library
//!
//! This module defines the error hierarchy for all operations in the crate.

use thiserror::Error;

/// Main error type for the Drive tree library
#[derive(Error, Debug)]
pub enum DriveTreeError {
    /// Drive API errors
    #[error("Drive API error: {0}")]
    Api(#[from] DriveApiError),

    /// A path segment did not resolve and creation was not requested
    #[error("Path not found: segment '{segment}' of '{path}' does not exist")]
    PathNotFound { segment: String, path: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Drive API errors
#[derive(Error, Debug)]
pub enum DriveApiError {
    #[error("File not found: {file_id}")]
    FileNotFound { file_id: String },

    #[error("Access token unavailable: {message}")]
    TokenUnavailable { message: String },

    #[error("API request failed: {message}")]
    RequestFailed { message: String },

    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter { name: String, message: String },
}

/// Result type alias for Drive tree operations
pub type Result<T> = std::result::Result<T, DriveTreeError>;
