//! User settings for the paycheck planner
//!
//! Selects the flow variant and holds the policy constants the wizard
//! applies: the fixed housing split, suggested fixed amounts and the wants
//! guideline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::{Category, CategorySet, Money};

/// Which finalization flow the wizard runs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FlowVariant {
    /// Ends with debt and goals, then a summary (variant A)
    #[default]
    SavingsSummary,
    /// Ends with additive wants entries (variant B)
    FinalWants,
}

impl FlowVariant {
    /// The categories the variant works with when none are configured
    pub fn default_categories(&self) -> CategorySet {
        match self {
            Self::SavingsSummary => CategorySet::full(),
            Self::FinalWants => CategorySet::spending_only(),
        }
    }
}

impl fmt::Display for FlowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SavingsSummary => write!(f, "savings-summary"),
            Self::FinalWants => write!(f, "final-wants"),
        }
    }
}

/// Policy constants for fixed expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPolicy {
    /// Rent portion of the housing step
    #[serde(default = "default_housing_rent")]
    pub housing_rent: Money,
    /// Utilities portion of the housing step
    #[serde(default = "default_housing_utilities")]
    pub housing_utilities: Money,
    /// Suggested groceries amount
    #[serde(default = "default_food")]
    pub food: Money,
    /// Suggested insurance, transit and subscriptions amount
    #[serde(default = "default_transportation")]
    pub transportation: Money,
}

fn default_housing_rent() -> Money {
    Money::from_dollars(275)
}

fn default_housing_utilities() -> Money {
    Money::from_dollars(100)
}

fn default_food() -> Money {
    Money::from_dollars(50)
}

fn default_transportation() -> Money {
    Money::from_dollars(174)
}

impl Default for FixedPolicy {
    fn default() -> Self {
        Self {
            housing_rent: default_housing_rent(),
            housing_utilities: default_housing_utilities(),
            food: default_food(),
            transportation: default_transportation(),
        }
    }
}

impl FixedPolicy {
    /// The housing step's total
    pub fn housing_total(&self) -> Money {
        self.housing_rent + self.housing_utilities
    }

    /// The amount the front end suggests for a fixed category, if any
    pub fn suggested(&self, category: Category) -> Option<Money> {
        match category {
            Category::Housing => Some(self.housing_rent),
            Category::Utilities => Some(self.housing_utilities),
            Category::Food => Some(self.food),
            Category::Transportation => Some(self.transportation),
            _ => None,
        }
    }
}

/// User settings for the planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Flow variant to run
    #[serde(default)]
    pub variant: FlowVariant,

    /// Categories in play; the variant's defaults when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    /// Fixed-expense policy
    #[serde(default)]
    pub fixed_policy: FixedPolicy,

    /// Suggested share of the remaining balance for wants, in percent
    #[serde(default = "default_wants_guideline_percent")]
    pub wants_guideline_percent: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_wants_guideline_percent() -> u32 {
    15
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            variant: FlowVariant::default(),
            categories: None,
            fixed_policy: FixedPolicy::default(),
            wants_guideline_percent: default_wants_guideline_percent(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Settings for a given variant, everything else default
    pub fn for_variant(variant: FlowVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// The effective category set
    pub fn category_set(&self) -> CategorySet {
        match &self.categories {
            Some(categories) => CategorySet::new(categories.iter().copied()),
            None => self.variant.default_categories(),
        }
    }

    /// Check the settings make sense before a session uses them
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.wants_guideline_percent > 100 {
            return Err(PlannerError::Config(format!(
                "wants_guideline_percent must be at most 100, got {}",
                self.wants_guideline_percent
            )));
        }

        let policy = &self.fixed_policy;
        if [policy.housing_rent, policy.housing_utilities, policy.food, policy.transportation]
            .iter()
            .any(Money::is_negative)
        {
            return Err(PlannerError::Config(
                "fixed_policy amounts can't be negative".into(),
            ));
        }

        if self.category_set().spending().next().is_none() {
            return Err(PlannerError::Config(
                "categories must include at least one need or want".into(),
            ));
        }

        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PlannerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlannerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PlannerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PlannerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
