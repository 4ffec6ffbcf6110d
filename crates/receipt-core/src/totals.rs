//! # Totals & Rounding Engine
//!
//! Running total and item count for a sequence of line items.
//!
//! ## Step-wise Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  running = round_half_up(running + entry_total)   ◄── after EVERY add  │
//! │                                                                         │
//! │  entries: 0.005, 0.005                                                 │
//! │    step-wise:   0.01 → 0.02     ✅ what receipts show                   │
//! │    sum-then-round: 0.010 → 0.01 ❌ not what receipts show               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::LineItem;

/// Adds one entry total to the running total and rounds the sum half-up to
/// 2 places.
///
/// ## Example
/// ```rust
/// use receipt_core::{money::Money, totals::accumulate};
/// use rust_decimal::Decimal;
///
/// let half_cent = Money::new(Decimal::new(5, 3));
/// let first = accumulate(Money::zero(), half_cent);
/// let second = accumulate(first, half_cent);
/// assert_eq!(first.amount(), Decimal::new(1, 2));
/// assert_eq!(second.amount(), Decimal::new(2, 2));
/// ```
#[inline]
pub fn accumulate(total: Money, entry_total: Money) -> Money {
    total.saturating_add(entry_total).round_half_up()
}

/// Derived totals for a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Step-wise rounded sum of every line total.
    pub running_total: Money,

    /// Sum of effective quantities (measured quantities count as 1).
    pub item_count: u64,
}

impl Totals {
    /// Folds the items in order; one pass, no side effects.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        items.into_iter().fold(Totals::default(), |totals, item| Totals {
            running_total: accumulate(totals.running_total, item.total_price()),
            item_count: totals
                .item_count
                .saturating_add(item.quantity.effective_quantity()),
        })
    }

    /// `"item"` for exactly one, `"items"` otherwise (including zero).
    pub fn item_label(&self) -> &'static str {
        if self.item_count == 1 {
            "item"
        } else {
            "items"
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
