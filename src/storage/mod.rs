//! Storage layer for expense-trend
//!
//! JSON file storage with atomic writes. The record store
//! ([`ExpenseRepository`]) and the budget provider ([`ProfileRepository`])
//! each own one file under the data directory.

pub mod expenses;
pub mod file_io;
pub mod profile;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use profile::{Profile, ProfileRepository};

use crate::config::paths::TrendPaths;
use crate::error::TrendError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrendPaths,
    pub expenses: ExpenseRepository,
    pub profile: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TrendPaths) -> Result<Self, TrendError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            profile: ProfileRepository::new(paths.profile_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrendPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TrendError> {
        self.expenses.load()?;
        self.profile.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrendError> {
        self.expenses.save()?;
        self.profile.save()?;
        Ok(())
    }
}
