//! Export module for expense-trend
//!
//! Writes a computed trend in one of several formats:
//! - CSV: one row per series point (spreadsheet-compatible)
//! - JSON: machine-readable, schema-versioned
//! - YAML: human-readable version of the JSON document

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_trend_csv;
pub use json::{export_trend_json, import_trend_json, TrendExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_trend_yaml;
