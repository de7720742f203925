//! The paycheck budget record
//!
//! Holds one paycheck's income and the amount allocated to each category.
//! The record itself enforces nothing; validation lives in
//! [`AllocationService`](crate::services::AllocationService).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::{Category, CategorySet};
use super::money::Money;

/// Income and per-category allocations for one paycheck
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Total paycheck amount
    income: Money,

    /// Whether income has been set this session
    income_set: bool,

    /// Allocated amount per category; absent means zero
    allocations: BTreeMap<Category, Money>,
}

impl Budget {
    /// Create a zeroed budget
    pub fn new() -> Self {
        Self::default()
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn is_income_set(&self) -> bool {
        self.income_set
    }

    /// Amount allocated to a category
    pub fn allocated(&self, category: Category) -> Money {
        self.allocations.get(&category).copied().unwrap_or_default()
    }

    /// Sum of needs and wants allocations within the given set
    pub fn spending_total(&self, categories: &CategorySet) -> Money {
        categories.spending().map(|c| self.allocated(c)).sum()
    }

    /// Income left after needs and wants
    pub fn remaining(&self, categories: &CategorySet) -> Money {
        self.income - self.spending_total(categories)
    }

    /// Iterate over every category with its allocation, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.allocated(c)))
    }

    pub(crate) fn set_income(&mut self, income: Money) {
        self.income = income;
        self.income_set = true;
    }

    pub(crate) fn set(&mut self, category: Category, amount: Money) {
        if amount.is_zero() {
            self.allocations.remove(&category);
        } else {
            self.allocations.insert(category, amount);
        }
    }

    pub(crate) fn add(&mut self, category: Category, amount: Money) {
        let total = self.allocated(category) + amount;
        self.set(category, total);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Income {}", self.income)?;
        for (category, amount) in self.allocations.iter() {
            write!(f, " | {} {}", category, amount)?;
        }
        Ok(())
    }
}
