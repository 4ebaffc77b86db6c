//! JSON export of a computed trend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrendError, TrendResult};
use crate::trends::{Granularity, ResolvedMode, Series, TrendOutput};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serialized form of one trend invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    pub mode: ResolvedMode,

    pub granularity: Granularity,

    pub record_count: usize,

    pub expense_series: Series,

    /// Omitted when no budget was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depletion_series: Option<Series>,
}

impl TrendExport {
    pub fn new(output: &TrendOutput, exported_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            mode: output.mode,
            granularity: output.granularity,
            record_count: output.record_count,
            expense_series: output.expense_series.clone(),
            depletion_series: output.depletion_series.clone(),
        }
    }

    /// Check the export can be read by this version
    pub fn validate(&self) -> TrendResult<()> {
        let major = self.schema_version.split('.').next().unwrap_or_default();
        let supported = EXPORT_SCHEMA_VERSION.split('.').next().unwrap_or_default();
        if major != supported {
            return Err(TrendError::Export(format!(
                "Unsupported schema version {} (expected {}.x)",
                self.schema_version, supported
            )));
        }

        if let Some(depletion) = &self.depletion_series {
            if depletion.len() != self.expense_series.len() {
                return Err(TrendError::Export(
                    "Depletion series length does not match expense series".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Write the trend as pretty-printed JSON
pub fn export_trend_json<W: Write>(output: &TrendOutput, writer: &mut W) -> TrendResult<()> {
    let export = TrendExport::new(output, Utc::now());

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrendError::Export(e.to_string()))?;

    Ok(())
}

/// Read a previously written JSON export
pub fn import_trend_json(json: &str) -> TrendResult<TrendExport> {
    let export: TrendExport =
        serde_json::from_str(json).map_err(|e| TrendError::Export(format!("Invalid export: {}", e)))?;
    export.validate()?;
    Ok(export)
}
