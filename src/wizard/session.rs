//! Planning session state machine
//!
//! A session owns one [`AllocationService`] and tracks which wizard step the
//! user has reached. Actions from the wrong step are refused before the
//! model is consulted; a rejected model call leaves the step where it was.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::{debug, info_span, Span};

use crate::config::settings::{FlowVariant, Settings};
use crate::error::{PlannerError, PlannerResult, ValidationError};
use crate::models::{Category, Money, RawAmount, SessionId, Summary};
use crate::services::AllocationService;

/// Wizard progress, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Start,
    IncomeSet,
    FixedExpensesAllocated,
    VariableExpensesAllocated,
    WantsAllocated,
    SavingsAllocated,
    Summary,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::IncomeSet => "income set",
            Self::FixedExpensesAllocated => "fixed expenses allocated",
            Self::VariableExpensesAllocated => "variable expenses allocated",
            Self::WantsAllocated => "wants allocated",
            Self::SavingsAllocated => "savings allocated",
            Self::Summary => "summary",
        };
        write!(f, "{}", name)
    }
}

/// One planning session: a budget plus the wizard's position
#[derive(Debug)]
pub struct PlanningSession {
    id: SessionId,
    step: WizardStep,
    model: AllocationService,
}

impl PlanningSession {
    /// Start a session at the first step
    pub fn new(settings: &Settings) -> Self {
        let session = Self {
            id: SessionId::new(),
            step: WizardStep::Start,
            model: AllocationService::new(settings),
        };
        debug!(session = %session.id, variant = %settings.variant, "session started");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Read access to the allocation model
    pub fn model(&self) -> &AllocationService {
        &self.model
    }

    pub fn variant(&self) -> FlowVariant {
        self.model.variant()
    }

    /// Set the paycheck income
    pub fn set_income(&mut self, raw: impl RawAmount) -> PlannerResult<()> {
        let _span = self.span().entered();
        self.guard("set income", WizardStep::Start..=WizardStep::Start)?;
        self.model.set_income(raw)?;
        self.advance(WizardStep::IncomeSet);
        Ok(())
    }

    /// Apply a fixed expense; only the step order can refuse it
    pub fn allocate_fixed(
        &mut self,
        category: Category,
        amount: impl RawAmount,
    ) -> PlannerResult<()> {
        let _span = self.span().entered();
        self.guard(
            "allocate a fixed expense",
            WizardStep::IncomeSet..=WizardStep::FixedExpensesAllocated,
        )?;
        self.model.allocate_fixed(category, amount);
        self.advance(WizardStep::FixedExpensesAllocated);
        Ok(())
    }

    /// Set a needs or wants category, bounded by income
    pub fn allocate_expense(
        &mut self,
        category: Category,
        raw: impl RawAmount,
    ) -> PlannerResult<()> {
        let _span = self.span().entered();
        let target = if category == Category::Wants {
            self.guard("allocate wants", WizardStep::IncomeSet..=WizardStep::WantsAllocated)?;
            WizardStep::WantsAllocated
        } else {
            self.guard(
                "allocate an expense",
                WizardStep::IncomeSet..=WizardStep::VariableExpensesAllocated,
            )?;
            WizardStep::VariableExpensesAllocated
        };
        self.model.allocate_expense(category, raw)?;
        self.advance(target);
        Ok(())
    }

    /// Add to wants (final-wants flow); returns the remaining balance
    pub fn allocate_final_wants(&mut self, raw: impl RawAmount) -> PlannerResult<Money> {
        let _span = self.span().entered();
        self.guard("add wants", WizardStep::IncomeSet..=WizardStep::WantsAllocated)?;
        let remaining = self.model.allocate_final_wants(raw)?;
        self.advance(WizardStep::WantsAllocated);
        Ok(remaining)
    }

    /// Allocate debt and goals and produce the summary (savings-summary flow)
    pub fn complete_planning(
        &mut self,
        debt_raw: impl RawAmount,
        goals_raw: impl RawAmount,
    ) -> PlannerResult<Summary> {
        let _span = self.span().entered();
        self.guard("complete planning", WizardStep::IncomeSet..=WizardStep::WantsAllocated)?;
        let summary = self.model.complete_planning(debt_raw, goals_raw)?;
        self.advance(WizardStep::SavingsAllocated);
        self.advance(WizardStep::Summary);
        Ok(summary)
    }

    /// End the final-wants flow and produce the summary
    pub fn finish(&mut self) -> PlannerResult<Summary> {
        let _span = self.span().entered();
        if self.variant() != FlowVariant::FinalWants {
            return Err(ValidationError::VariantMismatch {
                operation: "finishing without savings",
                variant: self.variant(),
            }
            .into());
        }
        self.guard("finish", WizardStep::IncomeSet..=WizardStep::WantsAllocated)?;
        self.advance(WizardStep::Summary);
        Ok(self.model.summary())
    }

    /// Summary of the current state
    pub fn summary(&self) -> Summary {
        self.model.summary()
    }

    /// Back to the first step with a zeroed budget
    pub fn restart(&mut self) {
        let _span = self.span().entered();
        self.model.restart();
        self.step = WizardStep::Start;
        debug!("wizard restarted");
    }

    fn span(&self) -> Span {
        info_span!("session", id = %self.id)
    }

    fn guard(
        &self,
        action: &'static str,
        allowed: RangeInclusive<WizardStep>,
    ) -> PlannerResult<()> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(PlannerError::StepOutOfOrder {
                action,
                step: self.step,
            })
        }
    }

    fn advance(&mut self, to: WizardStep) {
        if to != self.step {
            debug!(from = %self.step, to = %to, "wizard advanced");
            self.step = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(variant: FlowVariant) -> PlanningSession {
        PlanningSession::new(&Settings::for_variant(variant))
    }

    #[test]
    fn test_full_savings_flow_reaches_summary() {
        let mut s = session(FlowVariant::SavingsSummary);
        assert_eq!(s.step(), WizardStep::Start);

        s.set_income("1000").unwrap();
        assert_eq!(s.step(), WizardStep::IncomeSet);

        s.allocate_fixed(Category::Housing, 0.0).unwrap();
        s.allocate_fixed(Category::Food, "50").unwrap();
        s.allocate_fixed(Category::Transportation, "174").unwrap();
        assert_eq!(s.step(), WizardStep::FixedExpensesAllocated);

        s.allocate_expense(Category::OtherNeeds, "26").unwrap();
        assert_eq!(s.step(), WizardStep::VariableExpensesAllocated);

        s.allocate_expense(Category::Wants, "100").unwrap();
        assert_eq!(s.step(), WizardStep::WantsAllocated);

        let summary = s.complete_planning("100", "50").unwrap();
        assert_eq!(s.step(), WizardStep::Summary);
        assert_eq!(summary.unallocated(), Money::from_dollars(125));
    }

    #[test]
    fn test_final_wants_flow() {
        let mut s = session(FlowVariant::FinalWants);
        s.set_income("200").unwrap();
        s.allocate_fixed(Category::Food, "50").unwrap();

        assert_eq!(s.allocate_final_wants("25").unwrap(), Money::from_dollars(125));
        assert_eq!(s.allocate_final_wants("25").unwrap(), Money::from_dollars(100));
        assert_eq!(s.step(), WizardStep::WantsAllocated);

        let summary = s.finish().unwrap();
        assert_eq!(s.step(), WizardStep::Summary);
        assert_eq!(summary.line_for(Category::Wants).unwrap().amount, Money::from_dollars(50));
    }

    #[test]
    fn test_allocation_before_income_is_out_of_order() {
        let mut s = session(FlowVariant::SavingsSummary);
        let err = s.allocate_fixed(Category::Housing, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::StepOutOfOrder {
                step: WizardStep::Start,
                ..
            }
        ));
        assert!(s.model().budget().allocated(Category::Housing).is_zero());
    }

    #[test]
    fn test_rejected_call_keeps_step() {
        let mut s = session(FlowVariant::SavingsSummary);
        assert!(s.set_income("0").unwrap_err().is_validation());
        assert_eq!(s.step(), WizardStep::Start);

        s.set_income("100").unwrap();
        let err = s.allocate_expense(Category::Food, "101").unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::OverBudget { .. })
        ));
        assert_eq!(s.step(), WizardStep::IncomeSet);
    }

    #[test]
    fn test_steps_do_not_go_backwards() {
        let mut s = session(FlowVariant::SavingsSummary);
        s.set_income("1000").unwrap();
        s.allocate_expense(Category::Wants, "10").unwrap();

        assert!(s.allocate_fixed(Category::Food, "50").is_err());
        assert!(s.allocate_expense(Category::Food, "50").is_err());
        assert!(s.set_income("5").is_err());
        assert_eq!(s.step(), WizardStep::WantsAllocated);
    }

    #[test]
    fn test_nothing_after_summary_but_restart() {
        let mut s = session(FlowVariant::SavingsSummary);
        s.set_income("100").unwrap();
        s.complete_planning("0", "0").unwrap();
        assert!(s.complete_planning("0", "0").is_err());

        s.restart();
        assert_eq!(s.step(), WizardStep::Start);
        assert!(!s.model().budget().is_income_set());
        s.set_income("300").unwrap();
    }

    #[test]
    fn test_finish_requires_final_wants_variant() {
        let mut s = session(FlowVariant::SavingsSummary);
        s.set_income("100").unwrap();
        assert!(s.finish().unwrap_err().is_validation());
    }
}
