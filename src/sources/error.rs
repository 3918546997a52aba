//! Error type shared by every catalog backend call.

use thiserror::Error;

/// Failure classes for catalog backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure or a body that is not valid JSON.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status code.
    #[error("HTTP {status}")]
    Http {
        /// Status code returned by the backend.
        status: u16,
    },
    /// No video on the trailer platform exists for the movie.
    #[error("no trailer available")]
    NotFound,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Network(format!("malformed JSON: {e}"))
    }
}
