//! Spending distribution by category

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{TrendError, TrendResult};
use crate::models::{ExpenseRecord, Money};

/// Total spend for one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Sum amounts per category, largest first (ties broken by label)
pub fn category_totals<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> TrendResult<Vec<CategoryTotal>> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
    let mut grand_total = Money::zero();

    for record in records {
        grand_total = grand_total
            .checked_add(record.amount)
            .ok_or_else(|| TrendError::amount_overflow("Total spend"))?;

        // Bounded by the grand total, so this cannot overflow
        let entry = by_category
            .entry(record.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
            percentage: if grand_total.is_zero() {
                0.0
            } else {
                (total.cents() as f64 / grand_total.cents() as f64) * 100.0
            },
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, cents: i64) -> ExpenseRecord {
        let when = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ExpenseRecord::new(when, Money::from_cents(cents), category, "")
    }

    #[test]
    fn test_totals_sorted_and_percentages() {
        let records = vec![
            record("Food", 300),
            record("Rent", 600),
            record("Food", 100),
            record("Fun", 400),
        ];
        let totals = category_totals(&records).unwrap();

        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);
        assert_eq!(totals[1].total.cents(), 400);
        assert_eq!(totals[1].count, 2);
        assert!((totals[0].percentage - 42.857).abs() < 0.01);

        let sum: f64 = totals.iter().map(|t| t.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        let none: Vec<ExpenseRecord> = Vec::new();
        assert!(category_totals(&none).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_total_is_validation_error() {
        let half = i64::MAX / 2 + 1;
        let records = vec![record("Food", half), record("Rent", half)];
        assert!(category_totals(&records).unwrap_err().is_validation());
    }
}
