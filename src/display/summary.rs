//! Summary display formatting
//!
//! Renders a plan summary as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::CurrencyFormatter;
use crate::models::{LineKind, Summary};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
}

fn kind_label(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Income => "Income",
        LineKind::Expense => "Expense",
        LineKind::Savings => "Savings",
        LineKind::Remaining => "Remaining",
    }
}

/// Format a summary as a table
pub fn format_summary_table(summary: &Summary, formatter: &dyn CurrencyFormatter) -> String {
    let rows = summary.lines.iter().map(|line| SummaryRow {
        label: line.label.clone(),
        amount: formatter.format(line.amount),
        kind: kind_label(line.kind).to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
