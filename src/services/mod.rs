//! Service layer for expense-trend
//!
//! Business rules on top of the storage layer: input validation for new
//! expenses and the budget figure handed to the trend engine.

pub mod expense;
pub mod profile;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use profile::ProfileService;
