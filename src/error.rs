//! Error types for Answer Finder
//!
//! Errors are grouped by category. Filesystem errors carry the path and the
//! underlying I/O error; user-facing text is produced by the `i18n`
//! module from the status kinds derived from these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while working with the answers directory
#[derive(Error, Debug)]
pub enum AnswersError {
    /// The directory is missing and could not be created. Fatal.
    #[error("Could not create answers directory: {path}")]
    DirectoryUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory exists (or should) but could not be listed
    #[error("Could not read answers directory: {path}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched answer file could not be read
    #[error("Could not read answer file {name}")]
    FileUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnswersError {
    /// Message of the underlying I/O error, without the path prefix
    pub fn detail(&self) -> String {
        match self {
            AnswersError::DirectoryUncreatable { source, .. }
            | AnswersError::DirectoryUnreadable { source, .. }
            | AnswersError::FileUnreadable { source, .. } => source.to_string(),
        }
    }

}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the configuration file
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration directory could not be determined
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Clipboard related errors
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// Could not access clipboard
    #[error("Failed to access clipboard: {0}")]
    AccessError(String),

    /// Error setting clipboard content
    #[error("Failed to write to clipboard: {0}")]
    WriteError(String),
}

/// Result type alias for answers directory operations
pub type AnswersResult<T> = Result<T, AnswersError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
