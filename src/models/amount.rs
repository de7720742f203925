//! Raw amount input
//!
//! The wizard hands the model whatever the user typed. Anything that can be
//! turned into [`Money`] this way is accepted; unparsable input becomes zero
//! and every amount is clamped to [`Money::MAX`].

use super::money::Money;

/// A value that can be read as a money amount
pub trait RawAmount {
    fn to_money(&self) -> Money;
}

impl RawAmount for &str {
    fn to_money(&self) -> Money {
        Money::parse_lenient(self)
    }
}

impl RawAmount for String {
    fn to_money(&self) -> Money {
        Money::parse_lenient(self)
    }
}

impl RawAmount for f64 {
    fn to_money(&self) -> Money {
        Money::from_f64(*self)
    }
}

impl RawAmount for i64 {
    fn to_money(&self) -> Money {
        Money::from_cents(self.saturating_mul(100)).clamped()
    }
}

impl RawAmount for Money {
    fn to_money(&self) -> Money {
        self.clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_parse_leniently() {
        assert_eq!("50".to_money(), Money::from_dollars(50));
        assert_eq!(String::from("oops").to_money(), Money::zero());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(174.0_f64.to_money(), Money::from_dollars(174));
        assert_eq!(f64::NAN.to_money(), Money::zero());
        assert_eq!(500_i64.to_money(), Money::from_cents(50000));
        assert_eq!(Money::from_cents(7).to_money(), Money::from_cents(7));
        assert_eq!(i64::MAX.to_money(), Money::MAX);
        assert_eq!(Money::from_cents(i64::MAX).to_money(), Money::MAX);
    }
}
