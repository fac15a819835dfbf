//! Error types for rechroma

use thiserror::Error;

/// Result type alias for rechroma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rechroma
///
/// No error is recovered or retried anywhere in this crate; all failures
/// surface directly to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode error
    #[error("Decode error: {0}")]
    Decode(String),

    /// Network error (fetch failure, timeout, non-2xx response)
    #[error("Network error: {0}")]
    Network(String),

    /// Model invocation error
    #[error("Model error: {0}")]
    Model(String),

    /// Filter error
    #[error("Filter error: {0}")]
    Filter(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode(msg.into())
    }

    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a model error
    pub fn model<S: Into<String>>(msg: S) -> Self {
        Error::Model(msg.into())
    }

    /// Create a filter error
    pub fn filter<S: Into<String>>(msg: S) -> Self {
        Error::Filter(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
