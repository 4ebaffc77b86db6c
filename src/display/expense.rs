//! Expense display formatting

use crate::config::Settings;
use crate::models::ExpenseRecord;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &ExpenseRecord, settings: &Settings) -> String {
    format!(
        "{:12} {:10} {:16} {:>12}  {}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format),
        truncate(&expense.category, 16),
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.description
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[ExpenseRecord], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:16} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> ExpenseRecord {
        let when = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        ExpenseRecord::new(when, Money::from_cents(4250), "Entertainment and leisure", "fireworks")
    }

    #[test]
    fn test_empty_register() {
        let output = format_expense_register(&[], &Settings::default());
        assert_eq!(output, "No expenses found.\n");
    }

    #[test]
    fn test_register_row() {
        let output = format_expense_register(&[sample()], &Settings::default());
        assert!(output.contains("2024-07-04"));
        assert!(output.contains("$42.50"));
        assert!(output.contains("Entertainment a…"));
        assert!(output.contains("fireworks"));
    }

    #[test]
    fn test_details_use_currency_symbol() {
        let settings = Settings {
            currency_symbol: "£".into(),
            ..Settings::default()
        };
        let output = format_expense_details(&sample(), &settings);
        assert!(output.contains("£42.50"));
        assert!(output.contains("2024-07-04 18:45:00"));
    }
}
