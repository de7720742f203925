//! Custom error types for the paycheck planner
//!
//! Two layers: [`ValidationError`] covers every rejected user input in the
//! allocation model, and [`PlannerError`] wraps it together with the
//! configuration, I/O and wizard-ordering failures of the surrounding app.

use thiserror::Error;

use crate::config::settings::FlowVariant;
use crate::models::{Category, Money};
use crate::wizard::WizardStep;

/// A user input the allocation model refused to apply
///
/// The model is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Income must be a positive amount
    #[error("Please enter a valid income amount greater than zero")]
    NonPositiveIncome,

    /// Income can only be set once per session
    #[error("Income is already set for this paycheck; restart to change it")]
    IncomeAlreadySet,

    /// Allocations need an income to allocate from
    #[error("Set your income before allocating it")]
    IncomeNotSet,

    /// Amounts can't be negative
    #[error("{field} can't be negative (got {amount})")]
    NegativeAmount { field: String, amount: Money },

    /// Allocation would push needs and wants above income
    #[error("Not enough left for {category}: requested {requested}, only {available} available")]
    OverBudget {
        category: Category,
        requested: Money,
        available: Money,
    },

    /// Debt and goals together exceed what is left after wants
    #[error("Savings of {requested} exceed the {available} left after wants")]
    SavingsExceedRemaining { requested: Money, available: Money },

    /// Category is not part of the configured flow
    #[error("{0} is not part of this plan")]
    CategoryNotInFlow(Category),

    /// Savings categories are only set when planning completes
    #[error("{0} is a savings category and can't be allocated as an expense")]
    NotAnExpense(Category),

    /// Operation belongs to the other flow variant
    #[error("{operation} is not available in the {variant} flow")]
    VariantMismatch {
        operation: &'static str,
        variant: FlowVariant,
    },
}

impl ValidationError {
    /// Create a negative-amount error for a named field
    pub fn negative(field: impl Into<String>, amount: Money) -> Self {
        Self::NegativeAmount {
            field: field.into(),
            amount,
        }
    }
}

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wizard action attempted from the wrong step
    #[error("Can't {action} while at step '{step}'")]
    StepOutOfOrder {
        action: &'static str,
        step: WizardStep,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Input ended before the wizard finished
    #[error("Planning aborted")]
    Aborted,
}

impl PlannerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The underlying validation error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_budget_message_names_available() {
        let err = ValidationError::OverBudget {
            category: Category::Wants,
            requested: Money::from_cents(50000),
            available: Money::from_cents(40100),
        };
        assert_eq!(
            err.to_string(),
            "Not enough left for Wants: requested $500.00, only $401.00 available"
        );
    }

    #[test]
    fn test_validation_converts_to_planner_error() {
        let err: PlannerError = ValidationError::NonPositiveIncome.into();
        assert!(err.is_validation());
        assert_eq!(err.as_validation(), Some(&ValidationError::NonPositiveIncome));
        assert_eq!(
            err.to_string(),
            "Please enter a valid income amount greater than zero"
        );
    }

    #[test]
    fn test_step_out_of_order_display() {
        let err = PlannerError::StepOutOfOrder {
            action: "set income",
            step: WizardStep::Summary,
        };
        assert_eq!(err.to_string(), "Can't set income while at step 'summary'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
