//! Error types for bridge operations
//!
//! Every HTTP-facing failure carries the operation it belongs to so retry
//! logs and the final summary stay diagnosable without re-running.

use std::time::Duration;
use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while fetching defects or filing tickets
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Transport-level failure (connect error, timeout, TLS)
    #[error("{operation} request failed: {message}")]
    Http { operation: String, message: String },

    /// The remote service answered with a non-2xx status
    #[error("{operation} returned HTTP {status}")]
    Status { operation: String, status: u16 },

    /// The response body could not be decoded at all
    #[error("failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },

    /// Required environment variables are absent
    #[error("missing required environment variables: {}", .vars.join(", "))]
    MissingEnv { vars: Vec<String> },

    /// An environment variable holds a value we cannot use
    #[error("invalid value for {name}: {value}")]
    InvalidConfig { name: String, value: String },
}

impl BridgeError {
    /// Whether retrying the same operation can plausibly succeed.
    ///
    /// Transport failures and any non-2xx status are treated as transient;
    /// an undecodable body or a configuration problem is not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }

    /// Service-suggested delay before the next attempt, if any.
    ///
    /// Rate-limit responses (429) get a longer pause than the default
    /// backoff curve would give them.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Status { status: 429, .. } => Some(Duration::from_secs(5)),
            _ => None,
        }
    }
}
