//! Paycheck categories
//!
//! The full category catalogue is fixed; which categories a plan actually
//! uses is configuration (see [`CategorySet`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a category counts against income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Essential spending, counted against income
    Need,
    /// Discretionary spending, counted against income
    Want,
    /// Set aside from what is left after needs and wants
    Savings,
}

impl CategoryKind {
    /// Whether categories of this kind count toward the needs/wants total
    pub fn counts_against_income(&self) -> bool {
        matches!(self, Self::Need | Self::Want)
    }
}

/// A slot a paycheck can be allocated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Housing,
    Utilities,
    Food,
    Transportation,
    OtherNeeds,
    Wants,
    Emergency,
    Debt,
    Goals,
}

impl Category {
    /// Every category in canonical display order
    pub const ALL: [Category; 9] = [
        Category::Housing,
        Category::Utilities,
        Category::Food,
        Category::Transportation,
        Category::OtherNeeds,
        Category::Wants,
        Category::Emergency,
        Category::Debt,
        Category::Goals,
    ];

    /// The category's kind
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Housing
            | Self::Utilities
            | Self::Food
            | Self::Transportation
            | Self::OtherNeeds => CategoryKind::Need,
            Self::Wants => CategoryKind::Want,
            Self::Emergency | Self::Debt | Self::Goals => CategoryKind::Savings,
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::OtherNeeds => "Other Needs",
            Self::Wants => "Wants",
            Self::Emergency => "Emergency Fund",
            Self::Debt => "Extra Debt Payment",
            Self::Goals => "Future Goals",
        }
    }

    /// Stable identifier, as used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::OtherNeeds => "otherNeeds",
            Self::Wants => "wants",
            Self::Emergency => "emergency",
            Self::Debt => "debt",
            Self::Goals => "goals",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for unrecognized category names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().to_lowercase() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The ordered set of categories a plan works with
///
/// Always kept in canonical order and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Build a set from any list of categories
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut categories: Vec<Category> = categories.into_iter().collect();
        categories.sort_by_key(|c| c.position());
        categories.dedup();
        Self { categories }
    }

    /// All nine categories
    pub fn full() -> Self {
        Self::new(Category::ALL)
    }

    /// Only the needs and wants categories
    pub fn spending_only() -> Self {
        Self::new(
            Category::ALL
                .into_iter()
                .filter(|c| c.kind().counts_against_income()),
        )
    }

    /// Check if a category is part of the set
    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    /// Categories whose allocations count against income
    pub fn spending(&self) -> impl Iterator<Item = Category> + '_ {
        self.iter().filter(|c| c.kind().counts_against_income())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
