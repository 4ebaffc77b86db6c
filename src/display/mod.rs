//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, trend series and category
//! breakdowns for terminal display.

pub mod expense;
pub mod series;

pub use expense::{format_expense_details, format_expense_register, format_expense_row};
pub use series::{format_category_breakdown, format_trend};
