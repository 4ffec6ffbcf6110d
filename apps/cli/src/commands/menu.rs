//! # Main Menu Command
//!
//! Entry point of the interactive session.

use receipt_io::LoadError;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use super::{confirm, entry, ENTER_NUM, INVALID_NUMBER};
use crate::error::CliResult;
use crate::session::Session;

/// Runs the welcome menu until one action completes or input ends.
pub fn run_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<()> {
    session.console.say("Welcome to ReceiptChecker!")?;
    session.console.say(format_args!(
        "Please choose a number on what you want to do:\n\
         1 = Read from file\n\
         2 = Enter entries manually\n\
         3 = Exit\n\n{ENTER_NUM}"
    ))?;

    let invalid = format!("\n{INVALID_NUMBER}");
    loop {
        let Some(choice) = session.console.choose(">>> ", &invalid)? else {
            return Ok(());
        };

        match choice {
            1 => {
                read_from_file(session)?;
                break;
            }
            2 => {
                entry::enter_manually(session)?;
                break;
            }
            3 => break,
            _ => {}
        }
    }

    session.console.pause()?;
    Ok(())
}

/// Asks for an input file until one exists, then validates it.
///
/// A file that fails validation ends the session after printing the
/// diagnostic; nothing of it is kept.
fn read_from_file<R: BufRead, W: Write>(session: &mut Session<R, W>) -> CliResult<()> {
    session
        .console
        .say("\nEnter the filename including its extension (e.g., data.txt): ")?;

    loop {
        let Some(file) = session.console.prompt(">>> ")? else {
            return Ok(());
        };

        match session.store.load(&file, session.now) {
            Ok(receipt) => {
                info!(file = %file, entries = receipt.len(), "receipt accepted");
                return confirm::confirm(session, receipt);
            }
            Err(LoadError::NotFound { .. }) => {
                session.console.say(format_args!("\nERROR: {file} is not found."))?;
            }
            Err(LoadError::Parse(err)) => {
                warn!(file = %file, line = err.line(), kind = ?err.kind(), "receipt rejected");
                session.console.say(format_args!("ERROR: {err}"))?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
