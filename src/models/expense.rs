//! Expense record model
//!
//! An expense is an immutable fact once it reaches the trend engine: when it
//! happened, how much was spent, and a short category label.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Earliest calendar year an expense may fall in
pub const MIN_YEAR: i32 = 0;
/// Latest calendar year an expense may fall in
pub const MAX_YEAR: i32 = 9999;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// When the expense happened (local calendar time)
    pub date: NaiveDateTime,

    /// Amount spent, always positive
    pub amount: Money,

    /// Short category label (e.g. "Groceries")
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh ID
    pub fn new(
        date: NaiveDateTime,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount {
                id: self.id.to_string(),
                amount: self.amount,
            });
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory(self.id.to_string()));
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&self.date.year()) {
            return Err(ExpenseValidationError::DateOutOfRange {
                id: self.id.to_string(),
                date: self.date,
            });
        }

        Ok(())
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("expense {id} has non-positive amount {amount}")]
    NonPositiveAmount { id: String, amount: Money },

    #[error("expense {0} has no category")]
    MissingCategory(String),

    #[error("expense {id} is dated {date}, outside years 0000-9999")]
    DateOutOfRange { id: String, date: NaiveDateTime },
}
