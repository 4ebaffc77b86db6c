//! Expense repository for JSON storage
//!
//! Manages loading and saving expense records to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::TrendError;
use crate::models::{ExpenseId, ExpenseRecord};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, ExpenseRecord>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ExpenseId, ExpenseRecord>>, TrendError> {
        self.data
            .read()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ExpenseId, ExpenseRecord>>, TrendError> {
        self.data
            .write()
            .map_err(|e| TrendError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), TrendError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        data.extend(file_data.expenses.into_iter().map(|e| (e.id, e)));

        tracing::debug!(path = %self.path.display(), count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk, oldest first
    pub fn save(&self) -> Result<(), TrendError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, TrendError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All expenses in ascending date order (ties by ID for a stable file)
    pub fn get_all(&self) -> Result<Vec<ExpenseRecord>, TrendError> {
        let mut expenses: Vec<_> = self.read()?.values().cloned().collect();
        expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(expenses)
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: ExpenseRecord) -> Result<(), TrendError> {
        self.write()?.insert(expense.id, expense);
        Ok(())
    }

    /// Remove an expense, returning whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, TrendError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, TrendError> {
        Ok(self.read()?.len())
    }
}
