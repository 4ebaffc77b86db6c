//! Path management for expense-trend
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TREND_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-trend` on Linux,
//!    `~/Library/Application Support/expense-trend` on macOS,
//!    `%APPDATA%\expense-trend` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TrendError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TREND_DATA_DIR";

/// Manages all paths used by expense-trend
#[derive(Debug, Clone)]
pub struct TrendPaths {
    base_dir: PathBuf,
}

impl TrendPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, TrendError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to profile.json (budget figure)
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TrendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, TrendError> {
    let base = BaseDirs::new()
        .ok_or_else(|| TrendError::Config("Could not determine home directory".into()))?;
    Ok(base.config_dir().join("expense-trend"))
}
