//! CSV Export functionality
//!
//! Exports summary lines to CSV, one row per line.

use std::io::Write;

use super::ExportLine;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Summary;

/// Export a summary's lines as CSV with a header row
pub fn export_summary_csv<W: Write>(summary: &Summary, writer: &mut W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for line in ExportLine::from_summary(summary) {
        csv_writer
            .serialize(line)
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::FlowVariant;
    use crate::models::Category;
    use crate::services::AllocationService;

    #[test]
    fn test_csv_rows() {
        let mut service = AllocationService::for_variant(FlowVariant::SavingsSummary);
        service.set_income("1000").unwrap();
        service.allocate_expense(Category::OtherNeeds, "1.5").unwrap();
        let summary = service.complete_planning("0", "0").unwrap();

        let mut out = Vec::new();
        export_summary_csv(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "label,category,kind,amount");
        assert_eq!(lines[1], "Income,,income,1000.00");
        assert_eq!(lines[2], "Other Needs,otherNeeds,expense,1.50");
        assert_eq!(lines[3], "Unallocated,,remaining,998.50");
        assert_eq!(lines.len(), 4);
    }
}
