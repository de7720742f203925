//! Allocation service
//!
//! The allocation model: owns one paycheck [`Budget`], applies validated
//! updates to it and answers the derived balance questions the wizard
//! displays. Every fallible operation validates completely before writing,
//! so a rejected call never leaves a partial update behind.

use tracing::{debug, info, warn};

use crate::config::settings::{FixedPolicy, FlowVariant, Settings};
use crate::error::ValidationError;
use crate::models::{Budget, Category, CategorySet, Money, RawAmount, Summary};

/// Service owning and validating a single paycheck plan
#[derive(Debug, Clone)]
pub struct AllocationService {
    budget: Budget,
    categories: CategorySet,
    variant: FlowVariant,
    policy: FixedPolicy,
    wants_guideline_percent: u32,
}

impl AllocationService {
    /// Create a service with a zeroed budget
    pub fn new(settings: &Settings) -> Self {
        Self {
            budget: Budget::new(),
            categories: settings.category_set(),
            variant: settings.variant,
            policy: settings.fixed_policy,
            wants_guideline_percent: settings.wants_guideline_percent,
        }
    }

    /// Create a service for a variant with default settings
    pub fn for_variant(variant: FlowVariant) -> Self {
        Self::new(&Settings::for_variant(variant))
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn policy(&self) -> &FixedPolicy {
        &self.policy
    }

    /// Set the paycheck income
    ///
    /// Income must be positive and can be set once per session.
    pub fn set_income(&mut self, raw: impl RawAmount) -> Result<(), ValidationError> {
        let income = raw.to_money();

        if !income.is_positive() {
            return Err(ValidationError::NonPositiveIncome);
        }
        if self.budget.is_income_set() {
            return Err(ValidationError::IncomeAlreadySet);
        }

        self.budget.set_income(income);
        info!(%income, "income set");
        Ok(())
    }

    /// Apply a fixed expense
    ///
    /// Housing ignores `amount` and applies the policy's rent and utilities
    /// split. Other categories take `amount` as given. Unlike
    /// [`allocate_expense`](Self::allocate_expense) nothing is checked
    /// against income; an over-allocation is only logged.
    pub fn allocate_fixed(&mut self, category: Category, amount: impl RawAmount) {
        if category == Category::Housing {
            self.write_fixed(Category::Housing, self.policy.housing_rent);
            self.write_fixed(Category::Utilities, self.policy.housing_utilities);
        } else {
            let mut amount = amount.to_money();
            if amount.is_negative() {
                warn!(%category, %amount, "negative fixed amount clamped to zero");
                amount = Money::zero();
            }
            self.write_fixed(category, amount);
        }

        if self.is_over_allocated() {
            warn!(
                %category,
                remaining = %self.remaining(),
                "fixed allocation exceeds income"
            );
        }
    }

    fn write_fixed(&mut self, category: Category, amount: Money) {
        if !self.categories.contains(category) {
            warn!(%category, "fixed allocation ignored for category outside the plan");
            return;
        }
        self.budget.set(category, amount);
        debug!(%category, %amount, "fixed expense allocated");
    }

    /// Set a needs or wants category, bounded by income
    ///
    /// Overwrites the category's previous amount. Rejected when the new
    /// needs/wants total would exceed income; the error carries what is
    /// still available for this category.
    pub fn allocate_expense(
        &mut self,
        category: Category,
        raw: impl RawAmount,
    ) -> Result<(), ValidationError> {
        if !self.categories.contains(category) {
            return Err(ValidationError::CategoryNotInFlow(category));
        }
        if !category.kind().counts_against_income() {
            return Err(ValidationError::NotAnExpense(category));
        }
        self.require_income()?;

        let amount = raw.to_money();
        if amount.is_negative() {
            return Err(ValidationError::negative(category.label(), amount));
        }

        let total = self.total_allocated();
        let others = total - self.budget.allocated(category);
        if others + amount > self.budget.income() {
            return Err(ValidationError::OverBudget {
                category,
                requested: amount,
                available: self.budget.income() - others,
            });
        }

        self.budget.set(category, amount);
        debug!(%category, %amount, remaining = %self.remaining(), "expense allocated");
        Ok(())
    }

    /// Add to wants from what remains (final-wants flow)
    ///
    /// Additive: each call adds to the wants total. Returns the remaining
    /// balance after the addition.
    pub fn allocate_final_wants(&mut self, raw: impl RawAmount) -> Result<Money, ValidationError> {
        self.require_variant(FlowVariant::FinalWants, "final wants")?;
        if !self.categories.contains(Category::Wants) {
            return Err(ValidationError::CategoryNotInFlow(Category::Wants));
        }
        self.require_income()?;

        let amount = raw.to_money();
        if amount.is_negative() {
            return Err(ValidationError::negative(Category::Wants.label(), amount));
        }

        let remaining = self.remaining();
        if amount > remaining {
            return Err(ValidationError::OverBudget {
                category: Category::Wants,
                requested: amount,
                available: remaining,
            });
        }

        self.budget.add(Category::Wants, amount);
        let remaining = self.remaining();
        debug!(%amount, %remaining, "wants added");
        Ok(remaining)
    }

    /// Split what is left after wants between debt and goals, then summarize
    /// (savings-summary flow)
    ///
    /// The emergency fund is always zeroed here.
    pub fn complete_planning(
        &mut self,
        debt_raw: impl RawAmount,
        goals_raw: impl RawAmount,
    ) -> Result<Summary, ValidationError> {
        self.require_variant(FlowVariant::SavingsSummary, "completing with savings")?;
        self.require_income()?;

        let debt = debt_raw.to_money();
        let goals = goals_raw.to_money();

        for (category, amount) in [(Category::Debt, debt), (Category::Goals, goals)] {
            if amount.is_negative() {
                return Err(ValidationError::negative(category.label(), amount));
            }
            if amount.is_positive() && !self.categories.contains(category) {
                return Err(ValidationError::CategoryNotInFlow(category));
            }
        }

        let available = self.remaining_after_wants();
        let requested = debt + goals;
        if requested > available {
            return Err(ValidationError::SavingsExceedRemaining {
                requested,
                available,
            });
        }

        self.budget.set(Category::Emergency, Money::zero());
        self.budget.set(Category::Debt, debt);
        self.budget.set(Category::Goals, goals);
        info!(%debt, %goals, "planning completed");

        Ok(self.summary())
    }

    /// Build the summary for the current state
    pub fn summary(&self) -> Summary {
        Summary::build(
            &self.budget,
            &self.categories,
            self.final_remaining(),
            self.variant,
        )
    }

    /// Reset to a zeroed budget
    pub fn restart(&mut self) {
        self.budget.reset();
        info!("budget reset");
    }

    /// Sum of needs and wants allocations
    pub fn total_allocated(&self) -> Money {
        self.budget.spending_total(&self.categories)
    }

    /// Income minus needs and wants
    pub fn remaining(&self) -> Money {
        self.budget.remaining(&self.categories)
    }

    /// Remaining minus wants
    ///
    /// Wants count twice: once inside `remaining` and again here. The savings
    /// step displays this figure and bounds debt plus goals by it.
    pub fn remaining_after_wants(&self) -> Money {
        self.remaining() - self.budget.allocated(Category::Wants)
    }

    /// Remaining minus emergency, debt and goals
    pub fn final_remaining(&self) -> Money {
        self.remaining()
            - self.budget.allocated(Category::Emergency)
            - self.budget.allocated(Category::Debt)
            - self.budget.allocated(Category::Goals)
    }

    /// Suggested wants amount: the guideline share of what remains
    pub fn wants_guideline(&self) -> Money {
        let remaining = self.remaining();
        if remaining.is_positive() {
            remaining.percent(self.wants_guideline_percent)
        } else {
            Money::zero()
        }
    }

    pub fn wants_guideline_percent(&self) -> u32 {
        self.wants_guideline_percent
    }

    /// Whether needs and wants exceed income (only fixed allocations can cause this)
    pub fn is_over_allocated(&self) -> bool {
        self.total_allocated() > self.budget.income()
    }

    fn require_income(&self) -> Result<(), ValidationError> {
        if self.budget.is_income_set() {
            Ok(())
        } else {
            Err(ValidationError::IncomeNotSet)
        }
    }

    fn require_variant(
        &self,
        variant: FlowVariant,
        operation: &'static str,
    ) -> Result<(), ValidationError> {
        if self.variant == variant {
            Ok(())
        } else {
            Err(ValidationError::VariantMismatch {
                operation,
                variant: self.variant,
            })
        }
    }
}
