//! # Receipt Model
//!
//! The ordered set of line items plus optional header metadata.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   new() ──► append_entry(..) × N ──► sort_by_total_descending()? ──►   │
//! │                     ▲                          │                        │
//! │                     └──────── more appends ◄───┘  (interactive mode)    │
//! │                                                                         │
//! │   compute_totals() may be called at any point; it never mutates.       │
//! │   Items are never edited or removed, only appended and reordered.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::parser::ParsedLine;
use crate::totals::Totals;
use crate::types::{LineItem, ReceiptHeader};

/// Something that can be appended to a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptEntry {
    /// Sets the header (file mode, first line).
    Header(ReceiptHeader),
    /// Pushes an item to the tail.
    Item(LineItem),
}

impl From<ParsedLine> for ReceiptEntry {
    fn from(line: ParsedLine) -> Self {
        match line {
            ParsedLine::Header(header) => ReceiptEntry::Header(header),
            ParsedLine::Entry(item) => ReceiptEntry::Item(item),
        }
    }
}

impl From<LineItem> for ReceiptEntry {
    fn from(item: LineItem) -> Self {
        ReceiptEntry::Item(item)
    }
}

impl From<ReceiptHeader> for ReceiptEntry {
    fn from(header: ReceiptHeader) -> Self {
        ReceiptEntry::Header(header)
    }
}

/// A receipt being built, reviewed, or written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    header: Option<ReceiptHeader>,
    items: Vec<LineItem>,
}

impl Receipt {
    /// Creates an empty receipt with no header.
    pub fn new() -> Self {
        Receipt::default()
    }

    /// Appends a header or an item.
    ///
    /// A header replaces any header already set; an item goes to the tail.
    pub fn append_entry(&mut self, entry: impl Into<ReceiptEntry>) {
        match entry.into() {
            ReceiptEntry::Header(header) => self.header = Some(header),
            ReceiptEntry::Item(item) => self.items.push(item),
        }
    }

    pub fn header(&self) -> Option<&ReceiptHeader> {
        self.header.as_ref()
    }

    /// Items in their current order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total and item count over the current items.
    pub fn compute_totals(&self) -> Totals {
        Totals::from_items(&self.items)
    }

    /// Reorders items by line total, highest first.
    ///
    /// Stable: items with equal totals keep their relative order, so calling
    /// this twice is the same as calling it once. The header is untouched.
    pub fn sort_by_total_descending(&mut self) {
        self.items
            .sort_by(|a, b| b.total_price().cmp(&a.total_price()));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Quantity;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(name: &str, qty: u64, cents: i64) -> LineItem {
        LineItem::new(name, Quantity::Count(qty), Money::new(Decimal::new(cents, 2)))
    }

    fn names(receipt: &Receipt) -> Vec<&str> {
        receipt.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut receipt = Receipt::new();
        receipt.append_entry(item("A", 1, 100));
        receipt.append_entry(item("B", 1, 300));
        receipt.append_entry(item("C", 1, 200));
        assert_eq!(names(&receipt), ["A", "B", "C"]);
        assert!(receipt.header().is_none());
    }

    #[test]
    fn test_sort_descending_by_line_total() {
        let mut receipt = Receipt::new();
        receipt.append_entry(item("Cheap", 1, 100));
        receipt.append_entry(item("Bulk", 5, 100));
        receipt.append_entry(item("Pricey", 1, 300));
        receipt.sort_by_total_descending();
        assert_eq!(names(&receipt), ["Bulk", "Pricey", "Cheap"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut receipt = Receipt::new();
        receipt.append_entry(item("First", 2, 500));
        receipt.append_entry(item("Top", 1, 2000));
        receipt.append_entry(item("Second", 1, 1000));
        receipt.append_entry(item("Third", 10, 100));
        receipt.sort_by_total_descending();
        assert_eq!(names(&receipt), ["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_then_append() {
        let mut receipt = Receipt::new();
        receipt.append_entry(item("A", 1, 100));
        receipt.append_entry(item("B", 1, 200));
        receipt.sort_by_total_descending();
        receipt.append_entry(item("C", 1, 900));
        assert_eq!(names(&receipt), ["B", "A", "C"]);
        receipt.sort_by_total_descending();
        assert_eq!(names(&receipt), ["C", "B", "A"]);
    }

    #[test]
    fn test_compute_totals() {
        let mut receipt = Receipt::new();
        receipt.append_entry(item("A", 2, 1000));
        receipt.append_entry(item("B", 1, 5000));
        let totals = receipt.compute_totals();
        assert_eq!(totals.running_total.amount(), dec!(70.00));
        assert_eq!(totals.item_count, 3);
    }

    fn arb_item() -> impl Strategy<Value = LineItem> {
        ("[A-Z][a-z]{0,6}", 1u64..20, 0i64..100_000).prop_map(|(name, qty, millis)| {
            LineItem::new(name, Quantity::Count(qty), Money::new(Decimal::new(millis, 3)))
        })
    }

    proptest! {
        #[test]
        fn prop_compute_totals_is_idempotent(items in prop::collection::vec(arb_item(), 0..30)) {
            let mut receipt = Receipt::new();
            for item in items {
                receipt.append_entry(item);
            }
            prop_assert_eq!(receipt.compute_totals(), receipt.compute_totals());
        }

        #[test]
        fn prop_sort_is_idempotent_and_stable(items in prop::collection::vec(arb_item(), 0..30)) {
            let mut receipt = Receipt::new();
            for (i, item) in items.into_iter().enumerate() {
                receipt.append_entry(LineItem::new(format!("{}_{i}", item.name), item.quantity, item.unit_price));
            }

            let totals_before = receipt.compute_totals().item_count;
            receipt.sort_by_total_descending();
            let once = receipt.clone();
            receipt.sort_by_total_descending();
            prop_assert_eq!(&once, &receipt);
            prop_assert_eq!(totals_before, receipt.compute_totals().item_count);

            for pair in receipt.items().windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.total_price() >= b.total_price());
                if a.total_price() == b.total_price() {
                    let index = |item: &LineItem| -> usize {
                        item.name.rsplit('_').next().unwrap().parse().unwrap()
                    };
                    prop_assert!(index(a) < index(b));
                }
            }
        }
    }
}
