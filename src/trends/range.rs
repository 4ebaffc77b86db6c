//! Explicit inclusive date range
//!
//! Each bound is optional and independent. The start bound is the first
//! instant of its day, the end bound the last millisecond of its day.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::dates::{end_of_day, start_of_day};
use crate::models::ExpenseRecord;

/// Inclusive calendar range; an absent bound does not constrain that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` lies within both bounds
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        let after_start = self.start.map_or(true, |start| date >= start_of_day(start));
        let before_end = self.end.map_or(true, |end| date <= end_of_day(end));
        after_start && before_end
    }

    /// Keep the records inside the range
    ///
    /// An end before the start simply matches nothing.
    pub fn filter<'a>(
        &self,
        records: impl IntoIterator<Item = &'a ExpenseRecord>,
    ) -> Vec<&'a ExpenseRecord> {
        records
            .into_iter()
            .filter(|record| self.contains(record.date))
            .collect()
    }
}
