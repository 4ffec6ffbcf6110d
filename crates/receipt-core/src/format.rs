//! # Formatter
//!
//! Canonical text form of a receipt, shared by screen display and file output.
//!
//! ```text
//! 1-23-4567-89 2024/01/15 02:30:00 PM        ◄── omitted when no header
//! Apple 2 P10.00 P20.00
//! Rice_5kg 1kg P50.00 P50.00
//! P70.00 3_items
//! ```

use crate::receipt::Receipt;
use crate::totals::Totals;
use crate::types::{LineItem, ReceiptHeader};

/// Output format of the header date.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Output format of the header time (12-hour clock).
pub const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Renders the whole receipt, lines joined by `\n`, no trailing newline.
pub fn render(receipt: &Receipt) -> String {
    let mut lines = Vec::with_capacity(receipt.len() + 2);

    if let Some(header) = receipt.header() {
        lines.push(render_header(header));
    }
    lines.extend(receipt.items().iter().map(render_item));
    lines.push(render_totals(&receipt.compute_totals()));

    lines.join("\n")
}

/// `<receiptNumber> <YYYY/MM/DD> <hh:mm:ss AM/PM>`
pub fn render_header(header: &ReceiptHeader) -> String {
    format!(
        "{} {} {}",
        header.receipt_number,
        header.date.format(DATE_FORMAT),
        header.time.format(TIME_FORMAT)
    )
}

/// `<Name> <quantity> P<unit> P<total>`
pub fn render_item(item: &LineItem) -> String {
    format!(
        "{} {} {} {}",
        item.name,
        item.quantity,
        item.unit_price,
        item.total_price()
    )
}

/// `P<total> <count>_<item|items>`
pub fn render_totals(totals: &Totals) -> String {
    format!(
        "{} {}_{}",
        totals.running_total,
        totals.item_count,
        totals.item_label()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, ReceiptHeader};
    use chrono::NaiveDate;

    fn header(time: &str) -> ReceiptHeader {
        let now = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ReceiptHeader::from_fields("1-23-4567-89", "01/15/2024", time, now).unwrap()
    }

    #[test]
    fn test_render_header_twelve_hour_clock() {
        assert_eq!(render_header(&header("14:30:00")), "1-23-4567-89 2024/01/15 02:30:00 PM");
        assert_eq!(render_header(&header("00:05:09")), "1-23-4567-89 2024/01/15 12:05:09 AM");
        assert_eq!(render_header(&header("12:00:00")), "1-23-4567-89 2024/01/15 12:00:00 PM");
    }

    #[test]
    fn test_render_full_receipt() {
        let mut receipt = Receipt::new();
        receipt.append_entry(header("14:30:00"));
        receipt.append_entry(LineItem::from_fields("apple", "2", "P10").unwrap());
        receipt.append_entry(LineItem::from_fields("rice_5kg", "1kg", "P50.00").unwrap());

        assert_eq!(
            render(&receipt),
            "1-23-4567-89 2024/01/15 02:30:00 PM\n\
             Apple 2 P10.00 P20.00\n\
             Rice_5kg 1kg P50.00 P50.00\n\
             P70.00 3_items"
        );
    }

    #[test]
    fn test_render_without_header() {
        let mut receipt = Receipt::new();
        receipt.append_entry(LineItem::from_fields("milk", "0.50L", "P.125").unwrap());
        assert_eq!(render(&receipt), "Milk 0.50L P0.13 P0.13\nP0.13 1_item");
    }

    #[test]
    fn test_render_empty_receipt() {
        assert_eq!(render(&Receipt::new()), "P0.00 0_items");
    }
}
