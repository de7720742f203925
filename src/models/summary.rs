//! Plan summary
//!
//! The final view of a paycheck plan: an ordered list of labelled lines,
//! each tagged with the kind of money it represents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::Budget;
use super::category::{Category, CategoryKind, CategorySet};
use super::money::Money;
use crate::config::settings::FlowVariant;

/// What a summary line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Income,
    Expense,
    Savings,
    Remaining,
}

impl From<CategoryKind> for LineKind {
    fn from(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Need | CategoryKind::Want => Self::Expense,
            CategoryKind::Savings => Self::Savings,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Savings => "savings",
            Self::Remaining => "remaining",
        };
        write!(f, "{}", name)
    }
}

/// One line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    /// The category this line reports, if it is a category line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub amount: Money,
    pub kind: LineKind,
}

impl SummaryLine {
    fn for_category(category: Category, amount: Money) -> Self {
        Self {
            label: category.label().to_string(),
            category: Some(category),
            amount,
            kind: category.kind().into(),
        }
    }
}

/// A rendered-ready summary of a completed plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub variant: FlowVariant,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    /// Build the summary for a budget
    ///
    /// Income always comes first and is always present. Category lines
    /// follow in canonical order, then the unallocated line. Every line other
    /// than income appears only when its amount is positive.
    pub fn build(
        budget: &Budget,
        categories: &CategorySet,
        unallocated: Money,
        variant: FlowVariant,
    ) -> Self {
        let income = SummaryLine {
            label: "Income".to_string(),
            category: None,
            amount: budget.income(),
            kind: LineKind::Income,
        };
        let unallocated = SummaryLine {
            label: "Unallocated".to_string(),
            category: None,
            amount: unallocated,
            kind: LineKind::Remaining,
        };

        let category_lines = categories
            .iter()
            .map(|c| SummaryLine::for_category(c, budget.allocated(c)));

        let lines = std::iter::once(income)
            .chain(
                category_lines
                    .chain(std::iter::once(unallocated))
                    .filter(|l| l.amount.is_positive()),
            )
            .collect();

        Self {
            variant,
            generated_at: Utc::now(),
            lines,
        }
    }

    /// The line for a category, if it was included
    pub fn line_for(&self, category: Category) -> Option<&SummaryLine> {
        self.lines.iter().find(|l| l.category == Some(category))
    }

    /// The income line
    pub fn income(&self) -> Money {
        self.lines
            .iter()
            .find(|l| l.kind == LineKind::Income)
            .map(|l| l.amount)
            .unwrap_or_default()
    }

    /// The unallocated amount, zero when the line was omitted
    pub fn unallocated(&self) -> Money {
        self.lines
            .iter()
            .find(|l| l.kind == LineKind::Remaining)
            .map(|l| l.amount)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_budget() -> Budget {
        let mut budget = Budget::new();
        budget.set_income(Money::from_dollars(500));
        budget.set(Category::Wants, Money::from_dollars(50));
        budget.set(Category::Debt, Money::from_dollars(50));
        budget
    }

    #[test]
    fn test_zero_lines_are_dropped_except_income() {
        let summary = Summary::build(
            &Budget::new(),
            &CategorySet::full(),
            Money::zero(),
            FlowVariant::SavingsSummary,
        );
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].kind, LineKind::Income);
        assert!(summary.income().is_zero());
    }

    #[test]
    fn test_line_order_and_kinds() {
        let summary = Summary::build(
            &sample_budget(),
            &CategorySet::full(),
            Money::from_dollars(400),
            FlowVariant::SavingsSummary,
        );
        let labels: Vec<_> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Income", "Wants", "Extra Debt Payment", "Unallocated"]);

        let kinds: Vec<_> = summary.lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Income, LineKind::Expense, LineKind::Savings, LineKind::Remaining]
        );
        assert_eq!(summary.unallocated(), Money::from_dollars(400));
        assert!(summary.line_for(Category::Food).is_none());
    }

    #[test]
    fn test_categories_outside_set_are_not_listed() {
        let summary = Summary::build(
            &sample_budget(),
            &CategorySet::spending_only(),
            Money::zero(),
            FlowVariant::FinalWants,
        );
        assert!(summary.line_for(Category::Debt).is_none());
        assert!(summary.line_for(Category::Wants).is_some());
    }

    #[test]
    fn test_negative_unallocated_is_omitted() {
        let summary = Summary::build(
            &sample_budget(),
            &CategorySet::full(),
            Money::from_dollars(-5),
            FlowVariant::SavingsSummary,
        );
        assert!(summary.lines.iter().all(|l| l.kind != LineKind::Remaining));
        assert!(summary.unallocated().is_zero());
    }
}
