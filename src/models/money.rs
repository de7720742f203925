//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and the lenient parsing used
//! for raw wizard input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount raw input can produce: $10 trillion
    ///
    /// Sums over every category stay far inside `i64`.
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use paycheck_planner::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a Money amount from a float, rounding half away from zero to the cent
    ///
    /// Non-finite values become zero. Finite values are clamped to
    /// [`Money::MAX`] in magnitude.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        let limit = Self::MAX.0 as f64;
        Self((value * 100.0).round().clamp(-limit, limit) as i64)
    }

    /// This amount with its magnitude limited to [`Money::MAX`]
    pub const fn clamped(self) -> Self {
        if self.0 > Self::MAX.0 {
            Self::MAX
        } else if self.0 < -Self::MAX.0 {
            Self(-Self::MAX.0)
        } else {
            self
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The given whole percentage of this amount, rounded to the cent
    pub fn percent(&self, pct: u32) -> Self {
        let scaled = self.0 as i128 * pct as i128;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Self(rounded as i64)
    }

    /// Parse a raw amount the way a float-prefix parse would
    ///
    /// Takes the longest numeric prefix after an optional sign and `$`
    /// (`"12abc"` is 12.00, `".5"` is 0.50, `"1e3"` is 1000.00). Input with no
    /// numeric prefix is zero. Extra fractional digits round half away from
    /// zero, and the result is clamped to [`Money::MAX`] in magnitude.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();

        let (negative, rest) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let bytes = rest.as_bytes();
        let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        let (frac_digits, mantissa_len) = if bytes.get(int_len) == Some(&b'.') {
            let frac = &rest[int_len + 1..];
            let len = frac.bytes().take_while(|b| b.is_ascii_digit()).count();
            (&frac[..len], int_len + 1 + len)
        } else {
            ("", int_len)
        };

        if int_len == 0 && frac_digits.is_empty() {
            return Self::zero();
        }

        let magnitude = match exponent_len(&rest[mantissa_len..]) {
            Some(exp_len) => {
                let value: f64 = rest[..mantissa_len + exp_len].parse().unwrap_or(0.0);
                if value.is_finite() {
                    Self::from_f64(value)
                } else {
                    Self::MAX
                }
            }
            None => {
                let whole: i64 = if int_len == 0 {
                    0
                } else {
                    rest[..int_len].parse().unwrap_or(i64::MAX)
                };

                let digit = |i: usize| -> i64 {
                    frac_digits
                        .as_bytes()
                        .get(i)
                        .map(|b| (b - b'0') as i64)
                        .unwrap_or(0)
                };
                let mut cents = digit(0) * 10 + digit(1);
                if digit(2) >= 5 {
                    cents += 1;
                }
                Self(whole.saturating_mul(100).saturating_add(cents)).clamped()
            }
        };

        if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Length of an `e`/`E` exponent (optional sign, at least one digit) at the
/// start of `s`
fn exponent_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let sign_len = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(1 + sign_len + digits)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dollars(10);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse_lenient_plain_numbers() {
        assert_eq!(Money::parse_lenient("10.50").cents(), 1050);
        assert_eq!(Money::parse_lenient("  1000 ").cents(), 100000);
        assert_eq!(Money::parse_lenient("$10.50").cents(), 1050);
        assert_eq!(Money::parse_lenient("-10.5").cents(), -1050);
        assert_eq!(Money::parse_lenient("+3").cents(), 300);
        assert_eq!(Money::parse_lenient(".5").cents(), 50);
        assert_eq!(Money::parse_lenient("5.").cents(), 500);
    }

    #[test]
    fn test_parse_lenient_garbage_is_zero() {
        assert!(Money::parse_lenient("").is_zero());
        assert!(Money::parse_lenient("abc").is_zero());
        assert!(Money::parse_lenient("-").is_zero());
        assert!(Money::parse_lenient(".").is_zero());
    }

    #[test]
    fn test_parse_lenient_uses_numeric_prefix() {
        assert_eq!(Money::parse_lenient("12abc").cents(), 1200);
        assert_eq!(Money::parse_lenient("7.25 dollars").cents(), 725);
        assert_eq!(Money::parse_lenient("1.2.3").cents(), 120);
    }

    #[test]
    fn test_parse_lenient_rounds_to_cents() {
        assert_eq!(Money::parse_lenient("0.125").cents(), 13);
        assert_eq!(Money::parse_lenient("0.124").cents(), 12);
        assert_eq!(Money::parse_lenient("-0.125").cents(), -13);
        assert_eq!(Money::parse_lenient("9.999").cents(), 1000);
    }

    #[test]
    fn test_parse_lenient_exponent() {
        assert_eq!(Money::parse_lenient("1e3").cents(), 100000);
        assert_eq!(Money::parse_lenient("2.5E2").cents(), 25000);
        assert_eq!(Money::parse_lenient("-1e-2").cents(), -1);
        assert_eq!(Money::parse_lenient(".5e1").cents(), 500);
        // an exponent needs digits to count
        assert_eq!(Money::parse_lenient("3e").cents(), 300);
        assert_eq!(Money::parse_lenient("3e+x").cents(), 300);
    }

    #[test]
    fn test_parse_lenient_clamps_huge_input() {
        assert_eq!(Money::parse_lenient("99999999999999999999"), Money::MAX);
        assert_eq!(Money::parse_lenient("-99999999999999999999"), -Money::MAX);
        assert_eq!(Money::parse_lenient("1e400"), Money::MAX);
        assert_eq!(Money::from_f64(1e300), Money::MAX);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX);
        assert_eq!((big + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((-big - Money::from_cents(5)).cents(), i64::MIN);
        assert_eq!(Money::from_cents(i64::MIN).clamped(), -Money::MAX);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Money::from_f64(174.0).cents(), 17400);
        assert_eq!(Money::from_f64(-2.25).cents(), -225);
        assert!(Money::from_f64(f64::NAN).is_zero());
        assert!(Money::from_f64(f64::INFINITY).is_zero());
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::from_dollars(401).percent(15).cents(), 6015);
        assert_eq!(Money::from_cents(333).percent(15).cents(), 50);
        assert!(Money::zero().percent(15).is_zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
