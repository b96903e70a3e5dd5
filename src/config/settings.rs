//! User settings for the expense tracker
//!
//! Settings live in `config.json` under the base directory and only hold
//! location overrides. Absent fields take their defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::write_bytes_atomic;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Transactions file to use instead of `<base>/data/transactions.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Directory that `report --save` writes into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            reports_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::storage("read", &settings_path, e))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!(
                    "Failed to parse settings file {}: {}",
                    settings_path.display(),
                    e
                ))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        let contents = serde_json::to_string_pretty(self)?;
        write_bytes_atomic(paths.settings_file(), contents.as_bytes())
    }

    /// Effective transactions file
    pub fn data_file(&self, paths: &ExpensePaths) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| paths.transactions_file())
    }

    /// Effective report directory
    pub fn reports_dir(&self, paths: &ExpensePaths) -> PathBuf {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| paths.reports_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.data_file(&paths), paths.transactions_file());
        assert_eq!(settings.reports_dir(&paths), paths.reports_dir());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("home"));

        let settings = Settings {
            data_file: Some(temp_dir.path().join("elsewhere.csv")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.data_file(&paths), temp_dir.path().join("elsewhere.csv"));
    }

    #[test]
    fn test_invalid_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.data_file.is_none());
    }
}
