//! Error types for jsonstore
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only genuine failures live here. A key that is missing on read or delete
//! is a normal negative result and never surfaces as an `Error`, and stored
//! values always decode, so the store itself fails only on I/O or parsing.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for jsonstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jsonstore
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | I/O | `Io` | Directory or file cannot be created, read, or written |
/// | Parse | `Parse` | Store file on disk is not a JSON object of strings |
/// | Input | `InvalidInput` | Bad operation name, items, or configuration |
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the store directory or file
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path of the directory or file involved
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Existing store file is not a JSON object of strings
    #[error("failed to parse store '{}': {source}", path.display())]
    Parse {
        /// Path of the store file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid operation name, item list, or configuration
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable reason
        reason: String,
    },
}

impl Error {
    /// Build an I/O error for `path`.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a parse error for the store at `path`.
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build an invalid-input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for I/O failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// True when the store file on disk is not valid JSON of the expected shape.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
