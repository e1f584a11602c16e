//! Error types for jsonschema-gen
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for jsonschema-gen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Unsupported type: {message}")]
    UnsupportedType { message: String },

    #[error("Unsupported type unification: {message}")]
    UnsupportedTypeUnification { message: String },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid input in '{source_name}': {message}")]
    InvalidInput {
        source_name: String,
        message: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an unsupported-type error
    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::UnsupportedType {
            message: message.into(),
        }
    }

    /// Create an unsupported-type-unification error
    pub fn unsupported_unification(message: impl Into<String>) -> Self {
        Self::UnsupportedTypeUnification {
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Result type alias for jsonschema-gen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
