//! Common error types for the orders service

use thiserror::Error;

/// Common result type for order loading and configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading sources or resolving configuration
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured-record source could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delimited-text source could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
