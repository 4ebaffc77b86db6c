//! Profile service
//!
//! Supplies the budget figure to the trend engine.

use tracing::info;

use crate::error::TrendResult;
use crate::models::{BudgetContext, Money};
use crate::storage::Storage;

pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored budget as engine input
    pub fn budget(&self) -> TrendResult<BudgetContext> {
        Ok(BudgetContext::from(self.storage.profile.budget()?))
    }

    /// Replace (or clear, with `None`) the stored budget
    pub fn set_budget(&self, amount: Option<Money>) -> TrendResult<()> {
        self.storage.profile.set_budget(amount)?;
        self.storage.profile.save()?;

        match amount {
            Some(amount) => info!(%amount, "budget set"),
            None => info!("budget cleared"),
        }
        Ok(())
    }
}
