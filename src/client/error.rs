//! Error handling for the recipe client.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a client call can fail with.
///
/// Callers usually only care about the [`ErrorKind`]: a missing recipe is a
/// normal outcome, the other two are worth a retry prompt.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be completed or came back with a non-200 status
    #[error("Request to {url} failed: {failure}")]
    Transport {
        url: String,
        #[source]
        failure: TransportFailure,
    },

    /// The body was not the JSON shape we expected
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Lookup returned no recipe for this id
    #[error("No recipe found with id '{id}'")]
    NotFound { id: String },
}

/// Why a request counts as a transport error.
#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    NotFound,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Whether trying the same call again could succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// HTTP status for status-code failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Transport {
                failure: TransportFailure::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.to_string(),
            failure: TransportFailure::Network(source),
        }
    }

    pub(crate) fn unexpected_status(url: &str, status: StatusCode) -> Self {
        Error::Transport {
            url: url.to_string(),
            failure: TransportFailure::Status(status),
        }
    }

    pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
        Error::Decode {
            url: url.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
