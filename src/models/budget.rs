//! Budget context
//!
//! The amount a depletion series counts down from. An absent amount is a
//! normal state and only suppresses the depletion series.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Budget figure supplied alongside the expense records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetContext {
    /// Initial/available amount, if the user has set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_amount: Option<Money>,
}

impl BudgetContext {
    /// A budget with a known initial amount
    pub fn new(initial_amount: Money) -> Self {
        Self {
            initial_amount: Some(initial_amount),
        }
    }

    /// No budget figure available
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from raw user/provider text
    ///
    /// Blank or non-numeric input yields an absent amount rather than an error.
    pub fn from_input(raw: &str) -> Self {
        Self {
            initial_amount: Money::parse(raw).ok(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.initial_amount.is_some()
    }
}

impl From<Option<Money>> for BudgetContext {
    fn from(initial_amount: Option<Money>) -> Self {
        Self { initial_amount }
    }
}
