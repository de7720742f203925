//! JSON Export functionality
//!
//! Exports a summary to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::ExportLine;
use crate::config::settings::FlowVariant;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Summary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported summary structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Flow the plan was made with
    pub variant: FlowVariant,

    /// When the summary was built
    pub generated_at: DateTime<Utc>,

    pub lines: Vec<ExportLine>,
}

impl SummaryExport {
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            variant: summary.variant,
            generated_at: summary.generated_at,
            lines: ExportLine::from_summary(summary),
        }
    }
}

/// Export a summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(summary: &Summary, writer: &mut W) -> PlannerResult<()> {
    let export = SummaryExport::from_summary(summary);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}
