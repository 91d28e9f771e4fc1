use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while retrieving a raw resource.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request itself failed (e.g., connection refused, body read error).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The retrieval did not complete before its deadline.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// The resource is not served by this client.
    #[error("resource unavailable: {0}")]
    Unavailable(String),
}
