//! User settings for the expense tracker
//!
//! Settings live in `config.json` under the base directory. Every field has
//! a serde default so a partial or missing file still yields usable settings.

use serde::Deserialize;
use tracing::warn;

use super::paths::{ExpensePaths, DEFAULT_DATA_FILE};
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name (or absolute path) of the expense data file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Percentage represented by one `#` in category summary bars
    #[serde(default = "default_bar_step")]
    pub bar_step_percent: u8,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_bar_step() -> u8 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            data_file: default_data_file(),
            bar_step_percent: default_bar_step(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Config(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Like [`Settings::load`], but an unreadable or corrupt file only warns
    /// and yields the defaults
    pub fn load_or_default(paths: &ExpensePaths) -> Self {
        Self::load(paths).unwrap_or_else(|e| {
            warn!(path = %paths.settings_file().display(), error = %e, "ignoring settings file, using defaults");
            Settings::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.data_file, "expenses.json");
        assert_eq!(settings.bar_step_percent, 5);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "€", "data_file": "household.json", "bar_step_percent": 10}"#,
        )
        .unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(
            loaded,
            Settings {
                currency_symbol: "€".into(),
                data_file: "household.json".into(),
                bar_step_percent: 10,
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.data_file, "expenses.json");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ \"currency_symbol\": ").unwrap();

        assert_eq!(Settings::load_or_default(&paths), Settings::default());
        assert_eq!(
            std::fs::read_to_string(paths.settings_file()).unwrap(),
            "{ \"currency_symbol\": "
        );
    }

    #[test]
    fn test_unreadable_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.settings_file()).unwrap();

        assert!(Settings::load(&paths).is_err());
        assert_eq!(Settings::load_or_default(&paths), Settings::default());
    }
}
