//! Expense and depletion series
//!
//! Granular series carry one point per expense with cumulative semantics.
//! Aggregated series carry one point per bucket; expense points are the
//! bucket's own total and the depletion balance is floored at zero.
//!
//! Every builder uses checked cents arithmetic and reports a sum outside the
//! `i64` range as a validation error.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::bucket::{BucketKey, Buckets};
use crate::error::{TrendError, TrendResult};
use crate::models::{ExpenseRecord, Money};

/// X-axis label of a series point
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesLabel {
    /// Timestamp of an individual expense
    Instant(NaiveDateTime),
    /// Calendar bucket
    Bucket(BucketKey),
}

impl SeriesLabel {
    /// Render the label; `date_format` applies to instants only
    pub fn format(&self, date_format: &str) -> String {
        match self {
            Self::Instant(when) => when.format(date_format).to_string(),
            Self::Bucket(key) => key.to_string(),
        }
    }
}

impl fmt::Display for SeriesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(when) => write!(f, "{}", when.format("%Y-%m-%d %H:%M:%S")),
            Self::Bucket(key) => write!(f, "{}", key),
        }
    }
}

/// Index-aligned labels and values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    labels: Vec<SeriesLabel>,
    values: Vec<Money>,
}

impl Series {
    pub fn labels(&self) -> &[SeriesLabel] {
        &self.labels
    }

    pub fn values(&self) -> &[Money] {
        &self.values
    }

    /// `(label, value)` points in order
    pub fn points(&self) -> impl Iterator<Item = (&SeriesLabel, Money)> {
        self.labels.iter().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(SeriesLabel, Money)> for Series {
    fn from_iter<I: IntoIterator<Item = (SeriesLabel, Money)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Records in ascending date order; same-instant records keep input order
pub fn chronological<'a>(records: &[&'a ExpenseRecord]) -> Vec<&'a ExpenseRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.date);
    sorted
}

/// Running total of spend, one point per expense
pub fn granular_expense_series(records: &[&ExpenseRecord]) -> TrendResult<Series> {
    let mut running = Money::zero();
    chronological(records)
        .into_iter()
        .map(|record| {
            running = running
                .checked_add(record.amount)
                .ok_or_else(|| TrendError::amount_overflow("Cumulative spend"))?;
            Ok::<_, TrendError>((SeriesLabel::Instant(record.date), running))
        })
        .collect()
}

/// Remaining balance after each expense
///
/// Not clamped: a negative value means the budget was overspent.
pub fn granular_depletion_series(
    records: &[&ExpenseRecord],
    initial: Money,
) -> TrendResult<Series> {
    let mut remaining = initial;
    chronological(records)
        .into_iter()
        .map(|record| {
            remaining = remaining
                .checked_sub(record.amount)
                .ok_or_else(|| TrendError::amount_overflow("Remaining balance"))?;
            Ok::<_, TrendError>((SeriesLabel::Instant(record.date), remaining))
        })
        .collect()
}

/// Each bucket's own total, not accumulated across buckets
pub fn aggregated_expense_series(buckets: &Buckets) -> Series {
    buckets
        .iter()
        .map(|(key, total)| (SeriesLabel::Bucket(key.clone()), total))
        .collect()
}

/// Remaining balance after each bucket, floored at zero
///
/// The floor is applied at every step and the next bucket is subtracted
/// from the floored value.
pub fn aggregated_depletion_series(buckets: &Buckets, initial: Money) -> TrendResult<Series> {
    let mut remaining = initial;
    buckets
        .iter()
        .map(|(key, total)| {
            remaining = remaining
                .checked_sub(total)
                .ok_or_else(|| TrendError::amount_overflow("Remaining balance"))?
                .clamp_non_negative();
            Ok::<_, TrendError>((SeriesLabel::Bucket(key.clone()), remaining))
        })
        .collect()
}
