//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    round(0.125, 2) may give 0.12 because 0.125 is not exact            │
//! │                                                                         │
//! │  Receipt prices carry whatever precision the input had (P0.005 is      │
//! │  legal), so integer cents would already lose information on parse.    │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, rounded half-up to 2 places            │
//! │    0.005 + 0.005 → 0.01 → 0.02   (exact, every step)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::new(Decimal::new(1099, 2)); // P10.99
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "P32.97");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::{CURRENCY_SYMBOL, MONEY_SCALE};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary value at full input precision.
///
/// Values are only rounded when they are accumulated (see
/// [`crate::totals::accumulate`]) or displayed.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "P250.46" ──► validate_unit_price ──► LineItem.unit_price             │
/// │                                              │                          │
/// │                           × effective qty    ▼                          │
/// │                                        LineItem.total_price            │
/// │                                              │                          │
/// │                       accumulate (round)     ▼                          │
/// │                                        Totals.running_total            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds to 2 fractional digits, ties away from zero.
    ///
    /// ## Round Half Up (not Bankers Rounding)
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  0.125 → 0.13      0.135 → 0.14      0.005 → 0.01                   │
    /// │  A tie always moves to the larger magnitude.                        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let m = Money::new(Decimal::new(125, 3)); // 0.125
    /// assert_eq!(m.round_half_up().amount(), Decimal::new(13, 2));
    /// ```
    pub fn round_half_up(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies money by a whole quantity, saturating at the decimal range.
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Adds two amounts, saturating at the decimal range.
    #[inline]
    pub fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical receipt form: marker plus exactly 2 fractional digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.round_half_up().0;
        rounded.rescale(MONEY_SCALE);
        write!(f, "{}{}", CURRENCY_SYMBOL, rounded)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Addition of two Money values (full precision, no rounding).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(10.99)).to_string(), "P10.99");
        assert_eq!(Money::new(dec!(5)).to_string(), "P5.00");
        assert_eq!(Money::new(dec!(0)).to_string(), "P0.00");
        assert_eq!(Money::new(dec!(0.5)).to_string(), "P0.50");
    }

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(Money::new(dec!(0.125)).to_string(), "P0.13");
        assert_eq!(Money::new(dec!(2.675)).to_string(), "P2.68");
        assert_eq!(Money::new(dec!(0.004)).to_string(), "P0.00");
    }

    #[test]
    fn test_round_half_up_is_not_bankers() {
        // Bankers rounding would give 0.12 and 0.14 here
        assert_eq!(Money::new(dec!(0.125)).round_half_up().amount(), dec!(0.13));
        assert_eq!(Money::new(dec!(0.135)).round_half_up().amount(), dec!(0.14));
        assert_eq!(Money::new(dec!(0.005)).round_half_up().amount(), dec!(0.01));
    }

    #[test]
    fn test_addition_keeps_full_precision() {
        let a = Money::new(dec!(0.005));
        let b = Money::new(dec!(0.005));
        assert_eq!((a + b).amount(), dec!(0.010));

        let mut c = Money::zero();
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::new(dec!(2.99));
        assert_eq!(unit_price.multiply_quantity(3).amount(), dec!(8.97));
    }

    #[test]
    fn test_multiply_saturates() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.multiply_quantity(2).amount(), Decimal::MAX);
    }

    #[test]
    fn test_ordering_follows_amount() {
        assert!(Money::new(dec!(10.00)) > Money::new(dec!(9.99)));
        assert_eq!(Money::new(dec!(1.0)), Money::new(dec!(1.00)));
    }
}
