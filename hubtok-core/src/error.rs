//! Failure taxonomy for the fetch boundary.

use thiserror::Error;

/// Failures surfaced by the fetcher boundary.
///
/// Transient and permanent failures are deliberately not distinguished:
/// every variant leaves the catalog and cursor untouched, clears the
/// loading flag, and schedules no retry. A later trigger re-attempts.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure from the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// Response status code.
        status: reqwest::StatusCode,
        /// Leading bytes of the response body, for diagnostics.
        body: String,
    },

    /// The response was not the expected JSON array.
    #[error("malformed listing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A decoded listing entry failed validation.
    #[error("invalid record in listing: {0}")]
    InvalidRecord(String),
}

/// Alias for results carrying a [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;
