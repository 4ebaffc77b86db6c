//! Trend and category breakdown tables

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::trends::{CategoryTotal, ResolvedMode, TrendOutput};

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    label: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Render both series side by side
pub fn format_trend(output: &TrendOutput, settings: &Settings) -> String {
    let mut text = match output.mode {
        ResolvedMode::Granular => format!(
            "Granular view: {} expense(s), cumulative spend\n",
            output.record_count
        ),
        ResolvedMode::Aggregated => format!(
            "Aggregated view by {}: {} expense(s) in {} bucket(s)\n",
            output.granularity,
            output.record_count,
            output.expense_series.len()
        ),
    };

    if output.expense_series.is_empty() {
        text.push_str("No expenses in the selected period.\n");
        return text;
    }

    let symbol = settings.currency_symbol.as_str();
    let remaining = output.depletion_series.as_ref().map(|s| s.values());

    let rows = output
        .expense_series
        .points()
        .enumerate()
        .map(|(i, (label, spent))| TrendRow {
            label: label.format(&settings.date_format),
            spent: spent.format_with_symbol(symbol),
            remaining: remaining
                .and_then(|values| values.get(i))
                .map(|value| value.format_with_symbol(symbol))
                .unwrap_or_else(|| "-".to_string()),
        });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    text.push_str(&table.to_string());
    text.push('\n');

    if output.depletion_series.is_none() {
        text.push_str("No budget set; remaining balance not shown.\n");
    }

    text
}

/// Render the category distribution
pub fn format_category_breakdown(totals: &[CategoryTotal], settings: &Settings) -> String {
    if totals.is_empty() {
        return "No expenses in the selected period.\n".to_string();
    }

    let rows = totals.iter().map(|t| CategoryRow {
        category: t.category.clone(),
        count: t.count,
        total: t.total.format_with_symbol(&settings.currency_symbol),
        share: format!("{:.1}%", t.percentage),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());

    let mut text = table.to_string();
    text.push('\n');
    text
}
