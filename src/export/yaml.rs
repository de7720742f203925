//! YAML Export functionality
//!
//! Exports a summary to YAML for human-readable output.

use std::io::Write;

use super::json::SummaryExport;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Summary;

/// Export a summary as YAML
pub fn export_summary_yaml<W: Write>(summary: &Summary, writer: &mut W) -> PlannerResult<()> {
    let export = SummaryExport::from_summary(summary);

    writeln!(writer, "# Paycheck plan summary")
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
