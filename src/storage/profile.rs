//! Profile repository
//!
//! Holds the single budget figure depletion series count down from.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::TrendError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// On-disk profile document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Available amount (salary, allowance, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
}

pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Profile>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Profile::default()),
        }
    }

    pub fn load(&self) -> Result<(), TrendError> {
        let profile: Profile = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = profile;
        Ok(())
    }

    pub fn save(&self) -> Result<(), TrendError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    pub fn budget(&self) -> Result<Option<Money>, TrendError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.budget)
    }

    pub fn set_budget(&self, budget: Option<Money>) -> Result<(), TrendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.budget = budget;
        Ok(())
    }
}
