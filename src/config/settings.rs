//! User settings for the expense tracker
//!
//! Manages display preferences: currency symbol and name, and the default
//! report title.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in listings and reports
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Currency name used in the report footer
    #[serde(default = "default_currency_name")]
    pub currency_name: String,

    /// Report title used when none is given
    #[serde(default = "default_report_name")]
    pub default_report_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_currency_name() -> String {
    "Indian Rupees".to_string()
}

fn default_report_name() -> String {
    "Comprehensive Report".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            currency_name: default_currency_name(),
            default_report_name: default_report_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.currency_name, "Indian Rupees");
        assert_eq!(settings.default_report_name, "Comprehensive Report");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.currency_name = "US Dollars".into();

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.currency_name, "US Dollars");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.currency_name, "Indian Rupees");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
