use crate::error::SalesError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value in the development's currency.
///
/// Wrapper around `rust_decimal::Decimal` so financial figures never travel
/// as floats. Full precision is kept internally; rounding to two decimals
/// happens only when formatting.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

/// A strictly positive monetary amount, used where a zero or negative
/// figure would be a data-entry mistake (payments, cash movements).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, SalesError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(SalesError::validation("amount must be positive"))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SalesError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Rounded to the currency's two display decimals.
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(10.0));
        let b = Money::new(dec!(2.5));
        assert_eq!(a + b, Money::new(dec!(12.5)));
        assert_eq!(a - b, Money::new(dec!(7.5)));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [dec!(1.25), dec!(2.25), dec!(3.5)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total, Money::new(dec!(7.0)));
    }

    #[test]
    fn test_money_display_rounds_to_cents() {
        let m = Money::new(dec!(2812.505));
        assert_eq!(m.rounded(), dec!(2812.51));
        assert_eq!(format!("{}", Money::new(dec!(3750))), "3750.00");
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(SalesError::ValidationError(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-5.0)),
            Err(SalesError::ValidationError(_))
        ));
    }
}
