//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_register};
use crate::error::{TrendError, TrendResult};
use crate::models::Money;
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;
use crate::trends::dates::parse_timestamp;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// When it happened (YYYY-MM-DD or "YYYY-MM-DD HH:MM[:SS]"), defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by ID (or unique ID prefix)
    Delete {
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrendResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TrendError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let date = date.as_deref().map(parse_timestamp).transpose()?;

            let expense = service.create(CreateExpenseInput {
                amount,
                category,
                description,
                date,
            })?;

            println!("Recorded expense:");
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List { category, limit } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            print!("{}", format_expense_register(&expenses, settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense {} ({} {})",
                expense.id,
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category
            );
        }
    }

    Ok(())
}
