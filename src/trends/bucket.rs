//! Calendar bucketing for aggregated mode
//!
//! A [`BucketKey`] is a zero-padded date string, so sorting keys as strings
//! sorts them chronologically. Weeks are keyed by their Sunday.
//!
//! Keys only sort correctly for four-digit years; `ExpenseRecord::validate`
//! rejects dates outside years 0000-9999 before they reach the bucketer.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::dates::week_start;
use crate::error::{TrendError, TrendResult};
use crate::models::{ExpenseRecord, Money};

/// Size of an aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl Granularity {
    /// Canonical key of the bucket containing `date`
    pub fn key_for(&self, date: NaiveDateTime) -> BucketKey {
        let day = date.date();
        let text = match self {
            Self::Day => format!("{:04}-{:02}-{:02}", day.year(), day.month(), day.day()),
            Self::Week => {
                let sunday = week_start(day);
                format!("{:04}-{:02}-{:02}", sunday.year(), sunday.month(), sunday.day())
            }
            Self::Month => format!("{:04}-{:02}", day.year(), day.month()),
            Self::Year => format!("{:04}", day.year()),
        };
        BucketKey(text)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(format!(
                "Unknown granularity '{}'. Use day, week, month or year",
                s
            )),
        }
    }
}

/// Grouping and sort key for one calendar period
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketKey(String);

impl BucketKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-bucket totals in chronological order
///
/// Only buckets that received at least one record are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    totals: BTreeMap<BucketKey, Money>,
}

impl Buckets {
    /// Group records into buckets and sum their amounts
    ///
    /// Fails with a validation error when a bucket total leaves the cents range.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a ExpenseRecord>,
        granularity: Granularity,
    ) -> TrendResult<Self> {
        let mut totals: BTreeMap<BucketKey, Money> = BTreeMap::new();

        for record in records {
            let key = granularity.key_for(record.date);
            let total = totals.entry(key).or_default();
            *total = total
                .checked_add(record.amount)
                .ok_or_else(|| TrendError::amount_overflow("Bucket total"))?;
        }

        Ok(Self { totals })
    }

    /// `(key, total)` pairs in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, Money)> {
        self.totals.iter().map(|(key, total)| (key, *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
