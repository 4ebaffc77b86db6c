//! Relative calendar windows ("yesterday", "last week", ...)
//!
//! Every window is a half-open range of calendar dates computed from a
//! caller-supplied reference instant, so results never depend on the wall
//! clock at evaluation time.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates::{
    day_of_week, first_of_month, first_of_previous_month, first_of_previous_year, first_of_year,
};
use crate::models::ExpenseRecord;

/// Coarse relative time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Timeframe {
    /// No filtering
    #[default]
    All,
    /// The calendar day before today
    Yesterday,
    /// The previous week, see [`Timeframe::window`]
    LastWeek,
    /// The whole previous calendar month
    LastMonth,
    /// The whole previous calendar year
    LastYear,
}

/// Half-open range of calendar dates: `start <= date < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `[start, end)`, or an empty window at `end` when there is no `start`
    fn up_to(start: Option<NaiveDate>, end: NaiveDate) -> Self {
        Self {
            start: start.unwrap_or(end),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::All,
        Timeframe::Yesterday,
        Timeframe::LastWeek,
        Timeframe::LastMonth,
        Timeframe::LastYear,
    ];

    /// The calendar window selected relative to `now`, or `None` for `All`
    ///
    /// `LastWeek` runs from `today - (dow + 6)` up to (excluding)
    /// `today - dow`, where `dow` is 0 on Sunday.
    pub fn window(&self, now: NaiveDateTime) -> Option<DateWindow> {
        let today = now.date();

        match self {
            Self::All => None,
            Self::Yesterday => Some(DateWindow::up_to(today.pred_opt(), today)),
            Self::LastWeek => {
                let dow = day_of_week(today);
                Some(DateWindow {
                    start: today - Duration::days(dow + 6),
                    end: today - Duration::days(dow),
                })
            }
            Self::LastMonth => Some(DateWindow::up_to(
                first_of_previous_month(today),
                first_of_month(today),
            )),
            Self::LastYear => Some(DateWindow::up_to(
                first_of_previous_year(today),
                first_of_year(today),
            )),
        }
    }

    /// Keep the records that fall inside this timeframe
    pub fn filter<'a>(
        &self,
        records: impl IntoIterator<Item = &'a ExpenseRecord>,
        now: NaiveDateTime,
    ) -> Vec<&'a ExpenseRecord> {
        let window = self.window(now);
        records
            .into_iter()
            .filter(|record| window.map_or(true, |w| w.contains(record.date.date())))
            .collect()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Yesterday => "yesterday",
            Self::LastWeek => "lastWeek",
            Self::LastMonth => "lastMonth",
            Self::LastYear => "lastYear",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// Accepts `lastWeek`, `last-week`, `last_week` and friends, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "all" | "alltime" => Ok(Self::All),
            "yesterday" => Ok(Self::Yesterday),
            "lastweek" => Ok(Self::LastWeek),
            "lastmonth" => Ok(Self::LastMonth),
            "lastyear" => Ok(Self::LastYear),
            _ => Err(format!(
                "Unknown timeframe '{}'. Use all, yesterday, last-week, last-month or last-year",
                s
            )),
        }
    }
}
