//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every loading failure: I/O, parse errors,
//!   malformed roots, unsupported formats and custom handler failures.
//! - Define the conversion error raised by typed extraction (`get_as`).
//!
//! Does NOT handle:
//! - Absent keys. Lookups express absence through `Option`, defaults and
//!   `exists`, never through an error.
//!
//! Invariants:
//! - Every variant carries the source path it relates to.
//! - Parse errors carry the parser message as text, not the parser's error
//!   type, so the enum stays independent of format crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration into a store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} source at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    /// The source parsed, but its root is not a mapping.
    #[error("Malformed {format} source at {path}: root value must be a mapping")]
    MalformedSource { path: PathBuf, format: String },

    /// No built-in format or custom handler accepted the extension.
    ///
    /// Only raised when `ignore_unsupported_file_types` is disabled.
    #[error("Unsupported file type '{extension}' at {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Custom '{extension}' handler failed for {path}")]
    Handler {
        path: PathBuf,
        extension: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Value at '{path}' could not be converted: {source}")]
    Conversion {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        format: &'static str,
        message: impl Into<String>,
    ) -> Self {
        StoreError::Parse {
            path: path.into(),
            format,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
