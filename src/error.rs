//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A user-supplied or persisted field failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O-level failure while reading or writing a file
    #[error("Storage error: could not {action} {}: {source}", .path.display())]
    Storage {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The user abandoned a multi-step operation before it was committed
    #[error("Operation cancelled")]
    Cancelled,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExpenseError {
    /// Create a validation error from any displayable message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap an I/O failure together with the location it happened at
    pub fn storage(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Storage {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if the user cancelled the operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
