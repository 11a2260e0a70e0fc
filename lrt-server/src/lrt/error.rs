//! Fetcher error types.

use crate::domain::StationId;

/// Errors from fetching a station schedule.
///
/// `Http` is retryable by the caller; `UnknownStation` is deterministic and
/// never retried. `Api` and `Json` render the same as `Http` for users but
/// stay distinguishable for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum LrtError {
    /// Transport-level failure (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// HTTP error status, or a payload status that is neither 0 nor 1.
    #[error("API error {status}: {message}")]
    Api { status: i32, message: String },

    /// Requested station id is not in the catalog.
    #[error("unknown station id: {0}")]
    UnknownStation(StationId),
}

impl LrtError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LrtError::UnknownStation(_))
    }
}
