//! CSV export of a computed trend
//!
//! One row per series point: `series,label,value`, with the expense series
//! first and the depletion series (if any) after it.

use std::io::Write;

use crate::error::{TrendError, TrendResult};
use crate::trends::{Series, TrendOutput};

const HEADER: [&str; 3] = ["series", "label", "value"];

/// Write both series to CSV
pub fn export_trend_csv<W: Write>(output: &TrendOutput, writer: W) -> TrendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    write_series(&mut csv_writer, "expense", &output.expense_series)?;
    if let Some(depletion) = &output.depletion_series {
        write_series(&mut csv_writer, "depletion", depletion)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrendError::Export(e.to_string()))
}

fn write_series<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    name: &str,
    series: &Series,
) -> TrendResult<()> {
    for (label, value) in series.points() {
        let label = label.to_string();
        let value = value.to_decimal_string();
        csv_writer.write_record([name, label.as_str(), value.as_str()])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetContext, ExpenseRecord, Money};
    use crate::trends::{compute_series, FilterContext, Granularity, ViewMode};
    use chrono::NaiveDate;

    fn run(budget: BudgetContext) -> String {
        let at = |d, h| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let records = vec![
            ExpenseRecord::new(at(4, 9), Money::from_cents(1050), "Food", ""),
            ExpenseRecord::new(at(5, 18), Money::from_cents(250), "Food", ""),
        ];
        let output = compute_series(
            &records,
            &FilterContext::default(),
            ViewMode::Granular,
            Granularity::Day,
            &budget,
            at(10, 0),
        )
        .unwrap();

        let mut buffer = Vec::new();
        export_trend_csv(&output, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_with_budget() {
        let text = run(BudgetContext::new(Money::from_dollars(20)));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "series,label,value",
                "expense,2024-03-04 09:00:00,10.50",
                "expense,2024-03-05 18:00:00,13.00",
                "depletion,2024-03-04 09:00:00,9.50",
                "depletion,2024-03-05 18:00:00,7.00",
            ]
        );
    }

    #[test]
    fn test_csv_without_budget_has_no_depletion_rows() {
        let text = run(BudgetContext::none());
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("depletion"));
    }
}
