//! Core data models for expense-trend
//!
//! Expense records, money amounts and the budget figure consumed by the
//! trend engine.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::BudgetContext;
pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
