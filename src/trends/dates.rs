//! Calendar helpers shared by the filters and the bucketer
//!
//! All arithmetic is on naive local dates; weeks start on Sunday.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{TrendError, TrendResult};

/// Accepted timestamp layouts, tried in order
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const LAST_MILLISECOND: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("23:59:59.999 is a valid time of day"),
};

/// Midnight at the start of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `date` (23:59:59.999)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(LAST_MILLISECOND)
}

/// Days since the most recent Sunday (0 for Sunday)
pub fn day_of_week(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday())
}

/// The Sunday that starts the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_of_week(date))
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Stays inside the month, so never leaves the representable range
    date - Days::new(u64::from(date.day0()))
}

/// First day of the month before the one containing `date`
///
/// `None` when that month precedes [`NaiveDate::MIN`].
pub fn first_of_previous_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).pred_opt().map(first_of_month)
}

/// January 1st of the year containing `date`
pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

/// January 1st of the year before the one containing `date`
///
/// `None` when that year precedes [`NaiveDate::MIN`].
pub fn first_of_previous_year(date: NaiveDate) -> Option<NaiveDate> {
    first_of_year(date).pred_opt().map(first_of_year)
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> TrendResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrendError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a timestamp; a bare date means midnight of that day
pub fn parse_timestamp(s: &str) -> TrendResult<NaiveDateTime> {
    let trimmed = s.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|_| {
            TrendError::Validation(format!(
                "Invalid date/time: '{}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]",
                s
            ))
        })
}
