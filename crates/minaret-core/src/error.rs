//! Error types for minaret-core.
//!
//! Any failure during a single fetch attempt is one retryable error; only
//! [`FetchError::RetriesExhausted`] is fatal. Notification delivery has no
//! error type at all -- the sink swallows its own failures.

use thiserror::Error;

/// Errors from the time table fetcher.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not contain a timings payload.
    #[error("Malformed timings payload: {0}")]
    MalformedPayload(String),

    /// Retry budget exhausted without a usable response.
    #[error("Giving up after {attempts} failed attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
