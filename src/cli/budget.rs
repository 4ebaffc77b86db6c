//! Budget CLI commands
//!
//! The budget is the amount the depletion series counts down from.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrendError, TrendResult};
use crate::models::Money;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the current budget
    Show,

    /// Set the budget (e.g., "2500" or "2500.00")
    Set {
        amount: String,
    },

    /// Remove the budget; trends will show spend only
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrendResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        BudgetCommands::Show => match service.budget()?.initial_amount {
            Some(amount) => println!(
                "Budget: {}",
                amount.format_with_symbol(&settings.currency_symbol)
            ),
            None => println!("No budget set. Use 'expense-trend budget set <amount>'."),
        },

        BudgetCommands::Set { amount } => {
            let parsed = Money::parse(&amount).map_err(|e| {
                TrendError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            service.set_budget(Some(parsed))?;
            println!(
                "Budget set to {}",
                parsed.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Clear => {
            service.set_budget(None)?;
            println!("Budget cleared.");
        }
    }

    Ok(())
}
