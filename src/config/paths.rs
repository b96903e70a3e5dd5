//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by the `directories` crate, e.g.
//!    `~/.local/share/expense-tracker` on Linux

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform data
    /// directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default report directory (`<base>/reports/`)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.csv
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.csv")
    }
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a home directory".into()))
}
