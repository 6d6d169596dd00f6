//! Error types for Sparrow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} failed: {message}")]
    Remote { operation: String, message: String },

    #[error("no issued certificate matches domain '{0}'")]
    NoMatchingCertificate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap a failure reported by a remote service call.
    pub fn remote(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
