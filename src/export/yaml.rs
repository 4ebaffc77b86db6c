//! YAML export of a computed trend

use chrono::Utc;
use std::io::Write;

use crate::error::{TrendError, TrendResult};
use crate::export::json::TrendExport;
use crate::trends::TrendOutput;

/// Write the trend as YAML, preceded by a short comment header
pub fn export_trend_yaml<W: Write>(output: &TrendOutput, writer: &mut W) -> TrendResult<()> {
    let export = TrendExport::new(output, Utc::now());

    writeln!(writer, "# expense-trend export").map_err(|e| TrendError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrendError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetContext, ExpenseRecord, Money};
    use crate::trends::{compute_series, FilterContext, Granularity, ViewMode};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let when = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let records = vec![ExpenseRecord::new(when, Money::from_dollars(3), "Food", "")];
        let output = compute_series(
            &records,
            &FilterContext::default(),
            ViewMode::Aggregated,
            Granularity::Year,
            &BudgetContext::none(),
            when,
        )
        .unwrap();

        let mut buffer = Vec::new();
        export_trend_yaml(&output, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# expense-trend export"));
        assert!(text.contains("mode: aggregated"));
        assert!(text.contains("'2024'") || text.contains("\"2024\""));
        assert!(!text.contains("depletion_series"));
    }
}
