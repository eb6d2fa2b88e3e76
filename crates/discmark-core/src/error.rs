//! Error types for discmark operations.
//!
//! Tokenizing never fails; every error here originates from a user lookup
//! provider or from the surrounding tooling (configuration, I/O).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while rendering messages or loading their inputs.
#[derive(Error, Debug)]
pub enum Error {
    /// The lookup provider has no user with this id.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The lookup provider failed to resolve an id.
    #[error("Lookup failed for user {id}: {message}")]
    Lookup {
        /// The mention id being resolved.
        id: String,
        /// Provider-specific failure description.
        message: String,
        /// Whether retrying the same lookup may succeed.
        transient: bool,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", .path.display())]
    IoAt {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a permanent lookup error.
    pub fn lookup(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Lookup {
            id: id.into(),
            message: message.into(),
            transient: false,
        }
    }

    /// Create a lookup error that is worth retrying.
    pub fn transient_lookup(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Lookup {
            id: id.into(),
            message: message.into(),
            transient: true,
        }
    }

    /// Create a user-not-found error.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }

    /// Attach the offending path to an I/O error.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoAt {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns `true` if retrying the failed operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Lookup { transient, .. } => *transient,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::ConnectionReset
            ),
            Self::UserNotFound(_)
            | Self::IoAt { .. }
            | Self::Config(_)
            | Self::Serialization(_) => false,
        }
    }
}

/// Result type alias using discmark's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = Error::lookup("42", "connection refused");
        assert_eq!(
            err.to_string(),
            "Lookup failed for user 42: connection refused"
        );
    }

    #[test]
    fn test_user_not_found_display() {
        assert_eq!(Error::user_not_found("7").to_string(), "User not found: 7");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::transient_lookup("1", "rate limited").is_retryable());
        assert!(!Error::lookup("1", "banned").is_retryable());
        assert!(!Error::user_not_found("1").is_retryable());
        assert!(!Error::config("bad").is_retryable());

        let timeout = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        assert!(Error::from(timeout).is_retryable());
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!Error::from(missing).is_retryable());
    }

    #[test]
    fn test_io_with_path_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(source, "/tmp/msg.txt");
        assert_eq!(err.to_string(), "I/O error at /tmp/msg.txt: missing");
    }
}
