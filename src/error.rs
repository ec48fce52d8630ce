//! Error types for quizdeck
//!
//! This module defines the error hierarchy for the whole crate.
//! Fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Pagination itself never fails: out-of-range input is clamped. Per-question
//! import problems are data (`RowValidationError`), not `Error` values.

use thiserror::Error;

/// The main error type for quizdeck
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Storage / Navigation Errors
    // ============================================================================
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Navigation error: {message}")]
    Navigation { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Import Errors
    // ============================================================================
    #[error("Failed to parse question set: {message}")]
    Parse { message: String },

    #[error("Import rejected: {failed} of {total} questions failed validation")]
    RowsRejected { failed: usize, total: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a navigation error
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
        }
    }

    /// Create a question-set parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Check if this error aborts a whole import (as opposed to a rejected row set)
    pub fn is_fatal_import(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::FileNotFound { .. } | Error::Io(_)
        )
    }
}

/// Result type alias for quizdeck
pub type Result<T> = std::result::Result<T, Error>;
