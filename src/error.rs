//! Error types for table persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or loading a trigram table.
#[derive(Debug, Error)]
pub enum TableError {
    /// `TRIGRAM_BASE_PATH` could not be entered.
    #[error("Failed to change directory to {path}: {source}")]
    BasePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing the artifact.
    #[error("Failed to write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading a persisted artifact.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("Invalid table JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A persisted key is not three finger mnemonics.
    #[error("Unknown trigram key {key:?} in {path}")]
    UnknownKey { path: PathBuf, key: String },
}

/// Result type for table persistence.
pub type TableResult<T> = std::result::Result<T, TableError>;
