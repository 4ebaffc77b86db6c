//! User settings for expense-trend
//!
//! Display preferences and the defaults used by the `trend` command when
//! no explicit view or granularity is given.

use serde::{Deserialize, Serialize};

use super::paths::TrendPaths;
use crate::error::TrendError;
use crate::trends::{AutoThresholds, Granularity, ViewMode};

/// User settings for expense-trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// View used when `--view` is not given
    #[serde(default)]
    pub default_view: ViewMode,

    /// Bucket size used when `--by` is not given
    #[serde(default)]
    pub default_granularity: Granularity,

    /// Limits under which the auto view stays granular
    #[serde(default)]
    pub auto_thresholds: AutoThresholds,
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

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_view: ViewMode::default(),
            default_granularity: Granularity::default(),
            auto_thresholds: AutoThresholds::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing defaults on first run
    pub fn load_or_create(paths: &TrendPaths) -> Result<Self, TrendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrendError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.auto_thresholds.validate()?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::info!(path = %settings_path.display(), "created default settings");
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrendPaths) -> Result<(), TrendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
