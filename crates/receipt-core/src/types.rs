//! # Domain Types
//!
//! Core domain types used throughout Receipt Checker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ReceiptHeader  │   │    LineItem     │   │    Quantity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  receipt_number │   │  name           │   │  Count(u64)     │       │
//! │  │  date           │   │  quantity ──────┼──►│  Measured {     │       │
//! │  │  time           │   │  unit_price     │   │    amount, unit │       │
//! │  └─────────────────┘   └─────────────────┘   │  }              │       │
//! │                                               └─────────────────┘       │
//! │                                                                         │
//! │  Unit: g | kg | mL | L                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Unit
// =============================================================================

/// Weight/volume suffix accepted on a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "mL")]
    Millilitre,
    #[serde(rename = "L")]
    Litre,
}

impl Unit {
    /// Every unit, longest suffix first so `kg` wins over `g` and `mL` over `L`.
    pub const ALL: [Unit; 4] = [Unit::Kilogram, Unit::Millilitre, Unit::Gram, Unit::Litre];

    /// The suffix as written on a receipt (case-sensitive).
    pub const fn suffix(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "mL",
            Unit::Litre => "L",
        }
    }

    /// Splits a trailing unit off `s`, returning the numeric part and the unit.
    pub fn strip_suffix(s: &str) -> Option<(&str, Unit)> {
        Unit::ALL
            .iter()
            .find_map(|unit| s.strip_suffix(unit.suffix()).map(|rest| (rest, *unit)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A validated quantity token.
///
/// ## Effective Quantity
/// A measured quantity is one purchased unit regardless of its magnitude:
/// `0.5kg` and `50kg` both count as 1. A plain count is its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Plain whole number, always ≥ 1.
    Count(u64),
    /// Positive amount with a unit suffix.
    Measured { amount: Decimal, unit: Unit },
}

impl Quantity {
    /// Count contribution of this quantity to the receipt.
    #[inline]
    pub fn effective_quantity(&self) -> u64 {
        match self {
            Quantity::Count(n) => *n,
            Quantity::Measured { .. } => 1,
        }
    }

    pub fn unit(&self) -> Option<Unit> {
        match self {
            Quantity::Count(_) => None,
            Quantity::Measured { unit, .. } => Some(*unit),
        }
    }
}

/// Renders the token as it was written (decimal scale is preserved).
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Measured { amount, unit } => write!(f, "{amount}{unit}"),
        }
    }
}

// =============================================================================
// Receipt Header
// =============================================================================

/// Metadata from the first line of a receipt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptHeader {
    /// Receipt number in `D-DD-DDDD-DD` form.
    pub receipt_number: String,

    /// Calendar date of issue.
    pub date: NaiveDate,

    /// Time of day of issue.
    pub time: NaiveTime,
}

impl ReceiptHeader {
    /// Validates the three header tokens against the `now` instant.
    ///
    /// Fields are checked in order: receipt number, then date and time.
    pub fn from_fields(
        receipt_number: &str,
        date: &str,
        time: &str,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let receipt_number = validation::validate_receipt_number(receipt_number)?;
        let issued_at = validation::validate_date_time(date, time, now)?;

        Ok(ReceiptHeader {
            receipt_number,
            date: issued_at.date(),
            time: issued_at.time(),
        })
    }

    /// Combined issue instant.
    #[inline]
    pub fn issued_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased product on the receipt.
///
/// Items are immutable once built; the receipt only reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Normalized name (`cat_food` → `Cat_Food`).
    pub name: String,

    pub quantity: Quantity,

    /// Unit price with the currency marker stripped.
    pub unit_price: Money,
}

impl LineItem {
    /// Builds an item from already-validated parts.
    pub fn new(name: impl Into<String>, quantity: Quantity, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Validates a raw `(name, quantity, price)` triple.
    ///
    /// This is the boundary check the interactive prompt loop and the line
    /// parser share; the first failing field is reported.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::LineItem;
    ///
    /// let item = LineItem::from_fields("cat_food", "2", "P45.50").unwrap();
    /// assert_eq!(item.name, "Cat_Food");
    /// assert_eq!(item.total_price().to_string(), "P91.00");
    /// ```
    pub fn from_fields(name: &str, quantity: &str, unit_price: &str) -> Result<Self, ValidationError> {
        let name = validation::validate_item_name(name)?;
        let quantity = validation::validate_quantity(quantity)?;
        let unit_price = validation::validate_unit_price(unit_price)?;
        Ok(LineItem::new(name, quantity, unit_price))
    }

    /// Line total: effective quantity × unit price, at full precision.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.unit_price
            .multiply_quantity(self.quantity.effective_quantity())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
