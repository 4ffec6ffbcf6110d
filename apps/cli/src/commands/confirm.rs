//! # Confirm Command
//!
//! Shows a finished receipt and lets the user write it out, re-sort it, or
//! throw it away.

use receipt_core::{format, Receipt};
use receipt_io::StoreError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use super::{ENTER_NUM, INVALID_NUMBER};
use crate::error::CliResult;
use crate::session::Session;

const RULE: &str = "--------------------";

/// Displays `receipt` and loops on the result menu until it is written or
/// discarded.
pub fn confirm<R: BufRead, W: Write>(session: &mut Session<R, W>, mut receipt: Receipt) -> CliResult<()> {
    display(session, &receipt)?;

    let prompt = format!(
        "\nChoose what you want to do with the result:\n\
         1 = Write the results into a file.\n\
         2 = Sort the list by total price in descending order\n\
         3 = Discard and exit the program.\n\n{ENTER_NUM}"
    );
    let invalid = format!("\n{INVALID_NUMBER}");

    loop {
        let Some(choice) = session.console.choose(&prompt, &invalid)? else {
            return Ok(());
        };

        match choice {
            1 => return write_out(session, &receipt),
            2 => {
                receipt.sort_by_total_descending();
                debug!(items = receipt.items().len(), "receipt sorted");
                display(session, &receipt)?;
            }
            3 => {
                info!("receipt discarded");
                session.console.say("The program will now exit.")?;
                return Ok(());
            }
            _ => {}
        }
    }
}

/// Prints the canonical render between two rules.
fn display<R: BufRead, W: Write>(session: &mut Session<R, W>, receipt: &Receipt) -> CliResult<()> {
    let console = &mut session.console;
    console.say(format_args!("\nThis is the result of your receipt entry.\n\n{RULE}"))?;
    console.say(format::render(receipt))?;
    console.say(RULE)?;
    Ok(())
}

/// Asks for a filename until the receipt is written.
///
/// Every refused write is reported and the name asked again.
fn write_out<R: BufRead, W: Write>(session: &mut Session<R, W>, receipt: &Receipt) -> CliResult<()> {
    loop {
        let Some(name) = session
            .console
            .prompt("\nEnter the filename w/ \".txt\" in the end: ")?
        else {
            return Ok(());
        };

        match session.store.write(&name, receipt) {
            Ok(_) => {
                session
                    .console
                    .say(format_args!("\nSUCCESS: The results has been saved to \"{name}\""))?;
                return Ok(());
            }
            Err(err) => {
                if let StoreError::Write { path, .. } = &err {
                    warn!(path = %path.display(), "receipt not written");
                }
                session.console.say(format_args!("ERROR: {err}"))?;
            }
        }
    }
}
