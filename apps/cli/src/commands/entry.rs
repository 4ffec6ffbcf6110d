//! # Manual Entry Command
//!
//! Builds a receipt one item at a time from the console. Each field is
//! validated as it is typed and asked again until it passes, so the
//! finished receipt never needs a second validation pass.
//!
//! ```text
//! Entry #n
//!   item name  ──► validate_item_name  ──┐
//!   quantity   ──► validate_quantity   ──┼──► LineItem ──► Receipt::append_entry
//!   unit price ──► validate_unit_price ──┘
//! Add more entry?  1 ──► Entry #n+1     2 ──► confirm
//! ```
//!
//! Manually entered receipts carry no header.

use receipt_core::{validation, LineItem, Receipt};
use std::io::{BufRead, Write};
use tracing::info;

use super::{confirm, ENTER_NUM, INVALID_NUMBER};
use crate::console::Console;
use crate::error::CliResult;
use crate::session::Session;

/// Runs the manual entry loop, then hands the receipt to the result menu.
pub fn enter_manually<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<()> {
    let mut receipt = Receipt::new();
    let mut number = 1;

    loop {
        session.console.say(format_args!("\nEntry #{number}"))?;

        let Some(item) = read_item(&mut session.console)? else {
            return Ok(());
        };
        info!(entry = number, item = %item.name, "entry added");
        receipt.append_entry(item);

        match ask_add_more(&mut session.console)? {
            Some(true) => number += 1,
            Some(false) => return confirm::confirm(session, receipt),
            None => return Ok(()),
        }
    }
}

/// Reads the three fields of one item.
fn read_item<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<Option<LineItem>> {
    let Some(name) = console.ask_until("Enter item name without spaces: ", validation::validate_item_name)? else {
        return Ok(None);
    };
    let Some(quantity) = console.ask_until("Enter quantity: ", validation::validate_quantity)? else {
        return Ok(None);
    };
    let Some(unit_price) = console.ask_until("Enter unit price: ", validation::validate_unit_price)? else {
        return Ok(None);
    };

    Ok(Some(LineItem::new(name, quantity, unit_price)))
}

/// `Some(true)` to add another entry, `Some(false)` to finish.
fn ask_add_more<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<Option<bool>> {
    let prompt = format!("\nAdd more entry?\n1 = Yes\n2 = No\n\n{ENTER_NUM}");
    let invalid = format!("INVALID: {INVALID_NUMBER}");

    loop {
        match console.choose(&prompt, &invalid)? {
            Some(1) => return Ok(Some(true)),
            Some(2) => return Ok(Some(false)),
            Some(_) => {}
            None => return Ok(None),
        }
    }
}
