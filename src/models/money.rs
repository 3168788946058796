//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues when summing prices. On the wire a money value is a plain JSON
//! number of currency units (integer when whole, e.g. `10` or `3.5`), the
//! shape existing `users.json` files use.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a number of currency units, rounding to
    /// the nearest cent
    pub fn from_units(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a number of currency units
    pub fn units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
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

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10". The fractional
    /// part must be one or two digits; anything longer is rejected rather
    /// than rounded or truncated. Amounts that do not fit in cents are
    /// rejected as well.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        let cents = if let Some((units_str, frac_str)) = s.split_once('.') {
            if frac_str.is_empty()
                || frac_str.len() > 2
                || !frac_str.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }

            let units: i64 = units_str.parse().map_err(|_| invalid())?;
            let mut frac: i64 = frac_str.parse().map_err(|_| invalid())?;
            if frac_str.len() == 1 {
                frac *= 10;
            }

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(frac))
                .ok_or_else(invalid)?
        } else {
            // Integer format - whole currency units
            s.parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -cents } else { cents }))
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.units())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Ok(Self::from_units(units))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

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
    fn test_units_round_trip() {
        assert_eq!(Money::from_units(3.5).cents(), 350);
        assert_eq!(Money::from_units(10.0).cents(), 1000);
        assert_eq!(Money::from_cents(350).units(), 3.5);
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
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digit_fraction() {
        // Multi-byte input in the fractional part must error, not panic
        assert!(Money::parse("3.5€").is_err());
        assert!(Money::parse("3.€5").is_err());
        assert!(Money::parse("3.5x").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_that_overflow_cents() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("92233720368547758.99").is_err());
        assert!(Money::parse("-99999999999999999").is_err());
        // Largest whole-unit amount that still fits in cents
        assert_eq!(
            Money::parse("92233720368547758").unwrap().cents(),
            9_223_372_036_854_775_800
        );
    }

    #[test]
    fn test_parse_rejects_long_or_empty_fraction() {
        assert!(Money::parse("3.999").is_err());
        assert!(Money::parse("10.").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialize_whole_amount_as_integer() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1000)).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Money::from_cents(0)).unwrap(), "0");
    }

    #[test]
    fn test_serialize_fractional_amount_as_decimal() {
        assert_eq!(serde_json::to_string(&Money::from_cents(350)).unwrap(), "3.5");
        assert_eq!(serde_json::to_string(&Money::from_cents(-50)).unwrap(), "-0.5");
    }

    #[test]
    fn test_deserialize_integer_and_decimal() {
        let m: Money = serde_json::from_str("10").unwrap();
        assert_eq!(m.cents(), 1000);

        let m: Money = serde_json::from_str("3.5").unwrap();
        assert_eq!(m.cents(), 350);
    }
}
