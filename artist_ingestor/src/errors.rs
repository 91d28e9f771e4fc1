use snafu::{Backtrace, Snafu};

use crate::client::TransportError;

/// The single failure an aggregation cycle can report.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum FetchError {
    /// A required resource could not be retrieved.
    #[snafu(display("failed to retrieve {resource}: {source}"))]
    Transport {
        resource: String,
        source: TransportError,
        backtrace: Backtrace,
    },

    /// A required resource was retrieved but does not match its expected shape.
    #[snafu(display("failed to decode {resource}: {source}"))]
    Decode {
        resource: String,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// The aggregation worker went away without reporting an outcome.
    #[snafu(display("aggregation worker stopped before reporting an outcome"))]
    WorkerLost { backtrace: Backtrace },
}

/// Coarse classification of a [`FetchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Decode,
    Worker,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
            FetchError::WorkerLost { .. } => FetchErrorKind::Worker,
        }
    }

    /// The logical resource (`index`, `artists`, ...) that caused the failure, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            FetchError::Transport { resource, .. } | FetchError::Decode { resource, .. } => {
                Some(resource.as_str())
            }
            FetchError::WorkerLost { .. } => None,
        }
    }
}
