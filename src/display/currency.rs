//! Currency formatting
//!
//! The allocation model never formats money for people; front ends pick a
//! [`CurrencyFormatter`] and pass it to the display helpers.

use crate::models::Money;

/// Turns amounts into human-facing strings
pub trait CurrencyFormatter {
    fn format(&self, amount: Money) -> String;
}

/// en-US style formatting: symbol prefix, comma thousands, two decimals
///
/// Negative amounts render as `-$1,234.56`.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    symbol: String,
}

impl LocaleFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, amount: Money) -> String {
        let digits = amount.dollars().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, self.symbol, grouped, amount.cents_part())
    }
}

/// Plain two-decimal numbers, for machine-readable output
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl CurrencyFormatter for PlainFormatter {
    fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            amount.dollars().unsigned_abs(),
            amount.cents_part()
        )
    }
}
