//! Trend and category CLI commands
//!
//! Bridges command-line filters to the trend engine and renders the result
//! as a table or one of the export formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_category_breakdown, format_trend};
use crate::error::{TrendError, TrendResult};
use crate::export::{export_trend_csv, export_trend_json, export_trend_yaml};
use crate::models::BudgetContext;
use crate::services::{ExpenseService, ProfileService};
use crate::storage::Storage;
use crate::trends::dates::parse_date;
use crate::trends::{
    category_totals, compute_series_with, FilterContext, Granularity, Timeframe, ViewMode,
};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// One row per series point
    Csv,
    /// Schema-versioned JSON document
    Json,
    /// Same document as JSON, in YAML
    Yaml,
}

/// Filters shared by `trend` and `categories`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Relative window: all, yesterday, last-week, last-month, last-year
    #[arg(short, long, default_value = "all")]
    pub timeframe: String,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    fn to_context(&self) -> TrendResult<FilterContext> {
        let timeframe: Timeframe = self
            .timeframe
            .parse()
            .map_err(TrendError::Validation)?;
        let from = parse_optional_date(self.from.as_deref())?;
        let to = parse_optional_date(self.to.as_deref())?;

        Ok(FilterContext::new(timeframe, from, to))
    }
}

/// Arguments for `trend`
#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    /// View: auto, granular, aggregated (defaults to the configured view)
    #[arg(long)]
    pub view: Option<String>,

    /// Bucket size for the aggregated view: day, week, month, year
    #[arg(short, long)]
    pub by: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Budget to deplete instead of the stored one
    #[arg(long)]
    pub budget: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `trend`
pub fn handle_trend_command(
    storage: &Storage,
    settings: &Settings,
    args: TrendArgs,
) -> TrendResult<()> {
    let view = match args.view.as_deref() {
        Some(view) => view.parse::<ViewMode>().map_err(TrendError::Validation)?,
        None => settings.default_view,
    };
    let granularity = match args.by.as_deref() {
        Some(by) => by.parse::<Granularity>().map_err(TrendError::Validation)?,
        None => settings.default_granularity,
    };
    let filter = args.filter.to_context()?;

    // An explicit --budget wins; unparseable text means "no budget"
    let budget = match args.budget.as_deref() {
        Some(text) => BudgetContext::from_input(text),
        None => ProfileService::new(storage).budget()?,
    };

    let records = ExpenseService::new(storage).all()?;
    let now = Local::now().naive_local();
    debug!(records = records.len(), %view, %granularity, "computing trend");

    let output = compute_series_with(
        &records,
        &filter,
        view,
        granularity,
        &budget,
        now,
        &settings.auto_thresholds,
    )?;

    let mut writer = open_output(args.output.as_ref())?;
    match args.format {
        OutputFormat::Table => {
            write!(writer, "{}", format_trend(&output, settings))?;
        }
        OutputFormat::Csv => export_trend_csv(&output, &mut writer)?,
        OutputFormat::Json => export_trend_json(&output, &mut writer)?,
        OutputFormat::Yaml => export_trend_yaml(&output, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        println!("Trend written to: {}", path.display());
    }

    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command(
    storage: &Storage,
    settings: &Settings,
    args: FilterArgs,
) -> TrendResult<()> {
    let filter = args.to_context()?;
    let records = ExpenseService::new(storage).all()?;
    let now = Local::now().naive_local();

    let kept = filter.apply(&records, now);
    let totals = category_totals(kept)?;

    print!("{}", format_category_breakdown(&totals, settings));
    Ok(())
}

fn parse_optional_date(value: Option<&str>) -> TrendResult<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}

fn open_output(path: Option<&PathBuf>) -> TrendResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrendError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
