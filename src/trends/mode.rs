//! Granular vs. aggregated presentation
//!
//! `Auto` keeps short or sparse data as individual points and summarizes
//! long, dense data into calendar buckets.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TrendError, TrendResult};
use crate::models::ExpenseRecord;

/// Presentation requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Auto,
    Granular,
    Aggregated,
}

/// Presentation actually used after resolving `Auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    /// One point per expense
    Granular,
    /// One point per calendar bucket
    Aggregated,
}

/// Limits under which `Auto` stays granular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoThresholds {
    /// Maximum span (latest minus earliest) still shown per expense
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,

    /// Maximum record count still shown per expense
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_max_span_days() -> i64 {
    7
}

fn default_max_count() -> usize {
    20
}

impl Default for AutoThresholds {
    fn default() -> Self {
        Self {
            max_span_days: default_max_span_days(),
            max_count: default_max_count(),
        }
    }
}

impl AutoThresholds {
    /// Reject thresholds no span can satisfy
    pub fn validate(&self) -> TrendResult<()> {
        if self.max_span_days < 0 {
            return Err(TrendError::Config(format!(
                "auto_thresholds.max_span_days must not be negative, got {}",
                self.max_span_days
            )));
        }
        Ok(())
    }

    /// Whether `span` is within the granular limit
    ///
    /// A day count too large for a `Duration` is treated as unbounded.
    pub fn is_short(&self, span: Duration) -> bool {
        Duration::try_days(self.max_span_days).map_or(true, |limit| span <= limit)
    }
}

/// Time between the earliest and latest record, zero for fewer than two
pub fn span(records: &[&ExpenseRecord]) -> Duration {
    let earliest = records.iter().map(|r| r.date).min();
    let latest = records.iter().map(|r| r.date).max();

    match (earliest, latest) {
        (Some(earliest), Some(latest)) if records.len() > 1 => latest - earliest,
        _ => Duration::zero(),
    }
}

impl ViewMode {
    /// Resolve the mode for the already-filtered records
    ///
    /// `Auto` picks granular when the span is at most the threshold OR the
    /// count is at most the threshold; either condition alone is enough.
    pub fn resolve(&self, records: &[&ExpenseRecord], thresholds: &AutoThresholds) -> ResolvedMode {
        match self {
            Self::Granular => ResolvedMode::Granular,
            Self::Aggregated => ResolvedMode::Aggregated,
            Self::Auto => {
                let short = thresholds.is_short(span(records));
                let sparse = records.len() <= thresholds.max_count;
                if short || sparse {
                    ResolvedMode::Granular
                } else {
                    ResolvedMode::Aggregated
                }
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Granular => write!(f, "granular"),
            Self::Aggregated => write!(f, "aggregated"),
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granular => write!(f, "granular"),
            Self::Aggregated => write!(f, "aggregated"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "granular" => Ok(Self::Granular),
            "aggregated" | "aggregate" => Ok(Self::Aggregated),
            _ => Err(format!(
                "Unknown view '{}'. Use auto, granular or aggregated",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::days(i64::from(day))
    }

    fn records_on(days: &[u32]) -> Vec<ExpenseRecord> {
        days.iter()
            .map(|d| ExpenseRecord::new(at(*d), Money::from_cents(100), "Misc", ""))
            .collect()
    }

    #[test]
    fn test_explicit_modes_pass_through() {
        let owned = records_on(&(0..100u32).collect::<Vec<_>>());
        let records: Vec<_> = owned.iter().collect();
        let thresholds = AutoThresholds::default();
        assert_eq!(ViewMode::Granular.resolve(&records, &thresholds), ResolvedMode::Granular);
        assert_eq!(ViewMode::Aggregated.resolve(&[], &thresholds), ResolvedMode::Aggregated);
    }

    #[test]
    fn test_auto_count_threshold_wins_over_long_span() {
        let owned = records_on(&[0, 5, 10]);
        let records: Vec<_> = owned.iter().collect();
        assert!(span(&records) > Duration::days(7));
        assert_eq!(
            ViewMode::Auto.resolve(&records, &AutoThresholds::default()),
            ResolvedMode::Granular
        );
    }

    #[test]
    fn test_auto_short_span_wins_over_high_count() {
        let owned = records_on(&[0; 50]);
        let records: Vec<_> = owned.iter().collect();
        assert_eq!(
            ViewMode::Auto.resolve(&records, &AutoThresholds::default()),
            ResolvedMode::Granular
        );
    }

    #[test]
    fn test_auto_exactly_seven_days_is_granular() {
        let mut days = vec![0u32; 20];
        days.push(7);
        let owned = records_on(&days);
        let records: Vec<_> = owned.iter().collect();
        assert_eq!(records.len(), 21);
        assert_eq!(
            ViewMode::Auto.resolve(&records, &AutoThresholds::default()),
            ResolvedMode::Granular
        );
    }

    #[test]
    fn test_auto_long_and_dense_aggregates() {
        let owned = records_on(&(0..21u32).collect::<Vec<_>>());
        let records: Vec<_> = owned.iter().collect();
        assert_eq!(
            ViewMode::Auto.resolve(&records, &AutoThresholds::default()),
            ResolvedMode::Aggregated
        );
    }

    #[test]
    fn test_huge_span_threshold_does_not_overflow() {
        let owned = records_on(&(0..30u32).collect::<Vec<_>>());
        let records: Vec<_> = owned.iter().collect();
        let thresholds = AutoThresholds {
            max_span_days: i64::MAX,
            max_count: 0,
        };
        assert_eq!(ViewMode::Auto.resolve(&records, &thresholds), ResolvedMode::Granular);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_negative_span_threshold_is_rejected() {
        let thresholds = AutoThresholds {
            max_span_days: -1,
            max_count: 20,
        };
        assert!(matches!(thresholds.validate(), Err(TrendError::Config(_))));
        assert!(!thresholds.is_short(Duration::zero()));
    }

    #[test]
    fn test_span_uses_extremes_not_input_order() {
        let owned = records_on(&[9, 0, 3]);
        let records: Vec<_> = owned.iter().collect();
        assert_eq!(span(&records), Duration::days(9));
        assert_eq!(span(&records[..1]), Duration::zero());
        assert_eq!(span(&[]), Duration::zero());
    }

    #[test]
    fn test_parse_view_mode() {
        assert_eq!("Aggregated".parse::<ViewMode>().unwrap(), ViewMode::Aggregated);
        assert_eq!("auto".parse::<ViewMode>().unwrap(), ViewMode::Auto);
        assert!("pie".parse::<ViewMode>().is_err());
    }
}
