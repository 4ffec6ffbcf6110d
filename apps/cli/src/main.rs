//! # Receipt Checker Entry Point
//!
//! The actual setup is in lib.rs so it can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match receipt_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
