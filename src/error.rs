//! Errors returned by this crate

use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to the remote collection failed
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request could not be sent, or its response could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code
    #[error("unexpected HTTP status code {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The server answered, but not with the JSON we expected
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The configured URL cannot be used to address single items
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    /// Returns the HTTP status code, in case the server replied with an unexpected one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}


/// Why a [`Config`](crate::config::Config) could not be built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme {0:?} (only http and https are supported)")]
    UnsupportedScheme(String),

    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),

    #[error("unknown failure policy {0:?} (expected \"mirror\" or \"abort\")")]
    UnknownFailurePolicy(String),
}
