//! Custom error types for livraria-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for livraria-cli operations
#[derive(Error, Debug)]
pub enum LivrariaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors: database unreachable, schema missing, or a failed
    /// SQLite statement. Fatal to the operation in progress.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed CSV data during import. Aborts the remaining import but
    /// rows inserted before the bad one stay in the store.
    #[error("Malformed CSV data at row {row}: {message}")]
    Format { row: usize, message: String },

    /// Backup errors: the database file is missing at snapshot time, or the
    /// backup directory cannot be created.
    #[error("Backup error: {0}")]
    Backup(String),
}

impl LivrariaError {
    /// Create a format error for a specific CSV row (1-based, data rows only)
    pub fn format(row: usize, message: impl Into<String>) -> Self {
        Self::Format {
            row,
            message: message.into(),
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LivrariaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for LivrariaError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LivrariaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for livraria-cli operations
pub type LivrariaResult<T> = Result<T, LivrariaError>;
