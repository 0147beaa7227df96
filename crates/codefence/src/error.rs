//! Error types for codefence.
//!
//! Language detection itself is total and never fails; errors here cover
//! the fallible edges only: configuration loading and structured-data
//! serialization.
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Preserve error chains with `#[source]` attributes
//! - Include context in error messages (file paths, config values)
//!
//! `Io` errors bubble up unchanged; application errors are wrapped with
//! context via the `validation`/`serialization` constructors.

use thiserror::Error;

/// Result type alias using `CodefenceError`.
pub type Result<T> = std::result::Result<T, CodefenceError>;

/// Main error type for all codefence operations.
#[derive(Debug, Error)]
pub enum CodefenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CodefenceError {
    /// Create a Validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Serialization error.
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Serialization error with source.
    pub fn serialization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for CodefenceError {
    fn from(err: serde_json::Error) -> Self {
        CodefenceError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
