//! Expense trend aggregation and depletion engine
//!
//! Turns an unordered set of expense records plus a budget figure into two
//! time-indexed series: cumulative (or per-bucket) spend and remaining
//! balance. The pipeline is strictly linear:
//!
//! 1. timeframe filter ([`Timeframe`])
//! 2. range filter ([`DateRange`])
//! 3. mode selection ([`ViewMode::resolve`])
//! 4. bucketing, aggregated mode only ([`Buckets`])
//! 5. series building ([`series`])
//!
//! The engine is pure: it never reads the clock, never performs I/O and
//! keeps no state between calls. The caller re-invokes it whenever records,
//! filters, mode or budget change.

pub mod bucket;
pub mod category;
pub mod dates;
pub mod mode;
pub mod range;
pub mod series;
pub mod timeframe;

pub use bucket::{BucketKey, Buckets, Granularity};
pub use category::{category_totals, CategoryTotal};
pub use mode::{AutoThresholds, ResolvedMode, ViewMode};
pub use range::DateRange;
pub use series::{Series, SeriesLabel};
pub use timeframe::{DateWindow, Timeframe};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrendError, TrendResult};
use crate::models::{BudgetContext, ExpenseRecord};

/// Per-invocation filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterContext {
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub range: DateRange,
}

impl FilterContext {
    pub fn new(timeframe: Timeframe, range_start: Option<NaiveDate>, range_end: Option<NaiveDate>) -> Self {
        Self {
            timeframe,
            range: DateRange::new(range_start, range_end),
        }
    }

    /// Timeframe first, then the explicit range
    pub fn apply<'a>(&self, records: &'a [ExpenseRecord], now: NaiveDateTime) -> Vec<&'a ExpenseRecord> {
        let in_timeframe = self.timeframe.filter(records, now);
        debug!(
            timeframe = %self.timeframe,
            before = records.len(),
            after = in_timeframe.len(),
            "applied timeframe filter"
        );

        let in_range = self.range.filter(in_timeframe.iter().copied());
        debug!(
            start = ?self.range.start,
            end = ?self.range.end,
            after = in_range.len(),
            "applied range filter"
        );

        in_range
    }
}

/// Both series for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendOutput {
    /// Mode used after resolving `auto`
    pub mode: ResolvedMode,
    /// Bucket size (meaningful in aggregated mode)
    pub granularity: Granularity,
    /// Number of records that survived filtering
    pub record_count: usize,
    pub expense_series: Series,
    /// Absent when no budget figure was supplied
    pub depletion_series: Option<Series>,
}

/// Compute both series with the default auto-mode thresholds
pub fn compute_series(
    records: &[ExpenseRecord],
    filter: &FilterContext,
    mode: ViewMode,
    granularity: Granularity,
    budget: &BudgetContext,
    now: NaiveDateTime,
) -> TrendResult<TrendOutput> {
    compute_series_with(
        records,
        filter,
        mode,
        granularity,
        budget,
        now,
        &AutoThresholds::default(),
    )
}

/// Compute both series
///
/// Every input record is validated first; a single invalid record fails
/// the whole invocation so no running total is ever built from bad data.
pub fn compute_series_with(
    records: &[ExpenseRecord],
    filter: &FilterContext,
    mode: ViewMode,
    granularity: Granularity,
    budget: &BudgetContext,
    now: NaiveDateTime,
    thresholds: &AutoThresholds,
) -> TrendResult<TrendOutput> {
    for record in records {
        record
            .validate()
            .map_err(|e| TrendError::Validation(e.to_string()))?;
    }

    let filtered = filter.apply(records, now);
    let resolved = mode.resolve(&filtered, thresholds);
    debug!(requested = %mode, resolved = %resolved, count = filtered.len(), "resolved view mode");

    let (expense_series, depletion_series) = match resolved {
        ResolvedMode::Granular => (
            series::granular_expense_series(&filtered)?,
            budget
                .initial_amount
                .map(|initial| series::granular_depletion_series(&filtered, initial))
                .transpose()?,
        ),
        ResolvedMode::Aggregated => {
            let buckets = Buckets::from_records(filtered.iter().copied(), granularity)?;
            debug!(%granularity, buckets = buckets.len(), "bucketed expenses");
            (
                series::aggregated_expense_series(&buckets),
                budget
                    .initial_amount
                    .map(|initial| series::aggregated_depletion_series(&buckets, initial))
                    .transpose()?,
            )
        }
    };

    Ok(TrendOutput {
        mode: resolved,
        granularity,
        record_count: filtered.len(),
        expense_series,
        depletion_series,
    })
}
