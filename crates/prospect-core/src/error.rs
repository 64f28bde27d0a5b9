//! Error types for research operations.
//!
//! This module defines [`ResearchError`] which covers every failure that can occur
//! while fetching, decoding, or persisting prospect research data. Lookups that
//! simply find nothing are not errors; they are reported as `None`.

use thiserror::Error;

/// Errors that can occur during research operations.
#[derive(Error, Debug)]
pub enum ResearchError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// An upstream endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// The HTTP status code returned.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// Error decoding a payload from an upstream source.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error reading or writing local files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding research output.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

impl ResearchError {
    /// Returns true if this error came from an upstream call (network failure,
    /// non-success status, or an undecodable payload).
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Parse(_))
    }
}

/// Result type alias using [`ResearchError`].
pub type Result<T> = std::result::Result<T, ResearchError>;
