//! Guidance messages shown between wizard steps

use super::currency::CurrencyFormatter;
use crate::config::settings::FixedPolicy;
use crate::models::Money;

/// How the balance looks going into the savings step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsOutlook {
    /// Money left to put toward the future
    Surplus(Money),
    /// Every dollar allocated
    Balanced,
    /// Allocations exceed income by this much
    Over(Money),
}

impl SavingsOutlook {
    pub fn from_remaining(remaining: Money) -> Self {
        if remaining.is_positive() {
            Self::Surplus(remaining)
        } else if remaining.is_zero() {
            Self::Balanced
        } else {
            Self::Over(remaining.abs())
        }
    }

    pub fn message(&self, formatter: &dyn CurrencyFormatter) -> String {
        match self {
            Self::Surplus(amount) => format!(
                "You have {} left to secure your future.",
                formatter.format(*amount)
            ),
            Self::Balanced => "Every dollar has a job. Nicely done.".to_string(),
            Self::Over(amount) => format!(
                "You're over budget by {}. Restart to adjust your allocations.",
                formatter.format(*amount)
            ),
        }
    }
}

/// The housing step's explanation of the fixed split
pub fn housing_message(policy: &FixedPolicy, formatter: &dyn CurrencyFormatter) -> String {
    format!(
        "Housing is fixed: {} rent + {} utilities = {}",
        formatter.format(policy.housing_rent),
        formatter.format(policy.housing_utilities),
        formatter.format(policy.housing_total())
    )
}

/// The wants step's suggestion
pub fn wants_guideline_message(
    remaining: Money,
    guideline: Money,
    percent: u32,
    formatter: &dyn CurrencyFormatter,
) -> String {
    format!(
        "You have {} left. About {}% of that, {}, is a comfortable amount for wants.",
        formatter.format(remaining),
        percent,
        formatter.format(guideline)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::currency::LocaleFormatter;

    #[test]
    fn test_outlook_from_remaining() {
        assert_eq!(
            SavingsOutlook::from_remaining(Money::from_dollars(20)),
            SavingsOutlook::Surplus(Money::from_dollars(20))
        );
        assert_eq!(SavingsOutlook::from_remaining(Money::zero()), SavingsOutlook::Balanced);
        assert_eq!(
            SavingsOutlook::from_remaining(Money::from_dollars(-20)),
            SavingsOutlook::Over(Money::from_dollars(20))
        );
    }

    #[test]
    fn test_messages() {
        let f = LocaleFormatter::default();
        let over = SavingsOutlook::Over(Money::from_cents(1250)).message(&f);
        assert!(over.contains("over budget by $12.50"));

        let housing = housing_message(&FixedPolicy::default(), &f);
        assert_eq!(
            housing,
            "Housing is fixed: $275.00 rent + $100.00 utilities = $375.00"
        );

        let wants = wants_guideline_message(
            Money::from_dollars(401),
            Money::from_cents(6015),
            15,
            &f,
        );
        assert!(wants.contains("$401.00"));
        assert!(wants.contains("15%"));
        assert!(wants.contains("$60.15"));
    }
}
