//! User settings for Spendbook
//!
//! Holds the persisted answer to the high-value purchase prompt along with
//! display and report preferences.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendbookPaths;
use crate::error::SpendbookError;

/// The user's answer to "may purchases above the limit be recorded?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighValueConsent {
    /// Never asked; the next high-value purchase triggers the prompt
    #[default]
    Unset,
    /// User confirmed high-value purchases are allowed
    Granted,
    /// User declined; high-value purchases are rejected
    Denied,
}

impl HighValueConsent {
    /// Map a yes/no answer to a consent value
    pub fn from_answer(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

/// User settings for Spendbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Answer to the high-value purchase prompt
    #[serde(default)]
    pub high_value_purchases: HighValueConsent,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Title written into exported reports
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_report_title() -> String {
    "SPENDBOOK EXPENSE REPORT".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            high_value_purchases: HighValueConsent::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            report_title: default_report_title(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendbookPaths) -> Result<Self, SpendbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.check_date_format()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendbookPaths) -> Result<(), SpendbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SpendbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject a date format chrono can't render
    fn check_date_format(&self) -> Result<(), SpendbookError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SpendbookError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Record the user's answer to the high-value prompt and persist it
    pub fn record_high_value_answer(
        &mut self,
        granted: bool,
        paths: &SpendbookPaths,
    ) -> Result<(), SpendbookError> {
        self.high_value_purchases = HighValueConsent::from_answer(granted);
        self.save(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.high_value_purchases, HighValueConsent::Unset);
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.report_title = "Household".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.report_title, "Household");
        assert_eq!(loaded.high_value_purchases, HighValueConsent::Unset);
    }

    #[test]
    fn test_record_high_value_answer_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.record_high_value_answer(false, &paths).unwrap();
        assert_eq!(settings.high_value_purchases, HighValueConsent::Denied);

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.high_value_purchases, HighValueConsent::Denied);

        settings.record_high_value_answer(true, &paths).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.high_value_purchases, HighValueConsent::Granted);
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendbookError::Config(_)));
    }

    #[test]
    fn test_custom_date_format_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d.%m.%Y"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"high_value_purchases": "granted"}"#).unwrap();
        assert_eq!(settings.high_value_purchases, HighValueConsent::Granted);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.report_title, "SPENDBOOK EXPENSE REPORT");
    }
}
