//! Expense service
//!
//! Validated create/list/delete on top of the expense repository.

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{TrendError, TrendResult};
use crate::models::{ExpenseId, ExpenseRecord, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering the expense listing
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only expenses with this category (case-insensitive)
    pub category: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: String,
    pub description: String,
    /// Defaults to the current local time
    pub date: Option<NaiveDateTime>,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new expense
    pub fn create(&self, input: CreateExpenseInput) -> TrendResult<ExpenseRecord> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(TrendError::Validation("Description is required".into()));
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(TrendError::Validation("Category is required".into()));
        }

        if !input.amount.is_positive() {
            return Err(TrendError::Validation(format!(
                "Amount must be greater than zero, got {}",
                input.amount
            )));
        }

        let date = input.date.unwrap_or_else(|| Local::now().naive_local());
        let expense = ExpenseRecord::new(date, input.amount, category, description);
        expense
            .validate()
            .map_err(|e| TrendError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        info!(id = %expense.id, amount = %expense.amount, category = %expense.category, "created expense");
        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> TrendResult<Option<ExpenseRecord>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full ID or by a unique prefix of its ID
    pub fn find(&self, identifier: &str) -> TrendResult<Option<ExpenseRecord>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.get(id);
        }

        let mut matches: Vec<_> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(TrendError::Validation(format!(
                "'{}' matches {} expenses; use a longer ID",
                identifier, n
            ))),
        }
    }

    /// Every stored expense, oldest first
    pub fn all(&self) -> TrendResult<Vec<ExpenseRecord>> {
        self.storage.expenses.get_all()
    }

    /// List expenses newest first, applying the filter
    pub fn list(&self, filter: ExpenseFilter) -> TrendResult<Vec<ExpenseRecord>> {
        let mut expenses = self.storage.expenses.get_all()?;
        expenses.reverse();

        if let Some(category) = filter.category.as_deref() {
            let wanted = category.trim().to_lowercase();
            expenses.retain(|e| e.category.to_lowercase() == wanted);
        }

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Delete an expense by ID or unique prefix
    pub fn delete(&self, identifier: &str) -> TrendResult<ExpenseRecord> {
        let expense = self
            .find(identifier)?
            .ok_or_else(|| TrendError::expense_not_found(identifier))?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        info!(id = %expense.id, "deleted expense");
        Ok(expense)
    }

    pub fn count(&self) -> TrendResult<usize> {
        self.storage.expenses.count()
    }
}
