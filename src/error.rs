//! Error types for MD Highlighter
//!
//! Tokenization itself never fails. These errors cover the surroundings:
//! reading input files and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O related errors
    #[error(transparent)]
    FileIO(#[from] FileError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// File I/O related errors
#[derive(Error, Debug)]
pub enum FileError {
    /// File not found at specified path
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// File encoding error (non-UTF-8)
    #[error("Unable to read file as text. File may be binary or use unsupported encoding: {path}")]
    EncodingError { path: PathBuf },

    /// Error reading file
    #[error("Could not read file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading standard input
    #[error("Could not read from standard input")]
    StdinError(#[source] std::io::Error),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing configuration
    #[error("Invalid configuration format in {path}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl AppError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileIO(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
        }
    }
}

impl FileError {
    /// Build a read error, mapping "not found" to its own variant
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound(path),
            std::io::ErrorKind::InvalidData => FileError::EncodingError { path },
            _ => FileError::ReadError { path, source },
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FileError::NotFound(_) => {
                "The file could not be found. It may have been moved or deleted.".to_string()
            }
            FileError::EncodingError { .. } => {
                "This file cannot be read as text. It may be a binary file or use an unsupported encoding.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl ConfigError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::ParseError { path, source } => format!(
                "The configuration file {} is not valid JSON (line {}, column {}).",
                path.display(),
                source.line(),
                source.column()
            ),
            _ => self.to_string(),
        }
    }
}
