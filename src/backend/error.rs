//! Error types for the devil socket client

use thiserror::Error;

/// Result type for backend calls
pub type BackendResult<T> = Result<T, BackendError>;

/// Failure categories of a single backend round trip
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Socket absent, refused, or no timely answer
    #[error("{0}")]
    Connection(String),

    /// Reply was empty, not JSON, or not a JSON object
    #[error("{0}")]
    Protocol(String),

    /// The daemon understood the request and reported a failure
    #[error("{0}")]
    Command(String),
}

impl BackendError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }
}
