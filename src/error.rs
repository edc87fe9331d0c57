use thiserror::Error;

/// Reasons a roster could not be fetched. None of them is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport did not complete (DNS, connection, timeout), including
    /// while the body was being received.
    #[error("cannot reach roster endpoint")]
    NetworkFailure(#[source] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("failed to fetch: {status} - {status_text}")]
    Http { status: u16, status_text: String },
    /// The body is not JSON.
    #[error("roster body is not valid JSON")]
    Malformed(#[source] serde_json::Error),
    /// The body is JSON but not a successful roster envelope.
    #[error("invalid roster format: {0}")]
    InvalidShape(String),
}
