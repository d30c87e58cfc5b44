//! Monetary amounts in minor currency units.
//!
//! Amounts stay in minor units (e.g. cents) through every computation. The only
//! place they become major units is [`Money::to_major`], which the HTTP layer
//! calls when it renders a response.

use core::iter::Sum;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An amount in the smallest currency unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(amount: i64) -> Self {
        Self(amount)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Adds two amounts, clamping at the `i64` bounds instead of overflowing.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Converts to major units (e.g. dollars) for display.
    pub fn to_major(self, divisor: CurrencyDivisor) -> f64 {
        self.0 as f64 / f64::from(divisor.get())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Number of minor units in one major unit. Never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyDivisor(u32);

impl CurrencyDivisor {
    /// Cents to dollars.
    pub const CENTS: CurrencyDivisor = CurrencyDivisor(100);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("currency divisor must be greater than zero"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CurrencyDivisor {
    fn default() -> Self {
        Self::CENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_is_rejected() {
        let err = CurrencyDivisor::new(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn default_divisor_converts_cents_to_dollars() {
        let total = Money::from_minor(1_234);
        assert_eq!(total.to_major(CurrencyDivisor::default()), 12.34);
    }

    #[test]
    fn custom_divisor_is_applied() {
        let yen = CurrencyDivisor::new(1).unwrap();
        assert_eq!(Money::from_minor(500).to_major(yen), 500.0);
    }

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        let total: Money = [Money::from_minor(i64::MAX), Money::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Money = core::iter::empty().sum();
        assert_eq!(total, Money::ZERO);
    }
}
