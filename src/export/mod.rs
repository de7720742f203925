//! Export module for plan summaries
//!
//! Writes a finished summary in the format the user asked for:
//! - Table: the same view the wizard prints
//! - JSON / YAML: machine-readable, with schema versioning
//! - CSV: one row per summary line (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::display::{format_summary_table, CurrencyFormatter, PlainFormatter};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, LineKind, Summary};

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;

/// Output format for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed table
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

/// One exported summary line, amounts as plain decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLine {
    pub label: String,
    pub category: Option<Category>,
    pub kind: LineKind,
    pub amount: String,
}

impl ExportLine {
    pub fn from_summary(summary: &Summary) -> Vec<Self> {
        summary
            .lines
            .iter()
            .map(|line| Self {
                label: line.label.clone(),
                category: line.category,
                kind: line.kind,
                amount: PlainFormatter.format(line.amount),
            })
            .collect()
    }
}

/// Write a summary in the given format
pub fn write_summary<W: Write>(
    summary: &Summary,
    format: ExportFormat,
    formatter: &dyn CurrencyFormatter,
    writer: &mut W,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Table => writeln!(writer, "{}", format_summary_table(summary, formatter))
            .map_err(|e| PlannerError::Export(e.to_string())),
        ExportFormat::Json => export_summary_json(summary, writer),
        ExportFormat::Yaml => export_summary_yaml(summary, writer),
        ExportFormat::Csv => export_summary_csv(summary, writer),
    }
}
