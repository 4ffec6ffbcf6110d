//! # Check Command
//!
//! Non-interactive validation of one receipt file, for scripts and CI.
//!
//! ```text
//! receipt-checker check INPUT.txt --sort --output OUT.txt --format json
//!
//!   load ──► (sort) ──► print text|json ──► (write OUT.txt)
//!     │                                         │
//!     └── rejected ──► "ERROR: ..." exit 1 ◄────┘ name illegal or taken
//! ```

use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use receipt_core::{format, LineItem, Money, Receipt, ReceiptHeader, Totals};
use receipt_io::{LoadError, ReceiptStore, StoreError};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::error::CliResult;

/// Arguments of `receipt-checker check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Receipt file to validate
    pub file: PathBuf,

    /// Sort items by total price, highest first
    #[arg(long)]
    pub sort: bool,

    /// Also write the result to this file in the output directory
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// How to print the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Printed representation of a checked receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical receipt text
    Text,
    /// Receipt, per-item totals and grand total as JSON
    Json,
}

/// Result of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Accepted,
    Rejected,
}

impl CheckOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            CheckOutcome::Accepted => ExitCode::SUCCESS,
            CheckOutcome::Rejected => ExitCode::FAILURE,
        }
    }
}

// =============================================================================
// JSON Report
// =============================================================================

#[derive(Serialize)]
struct ReceiptReport<'a> {
    header: Option<&'a ReceiptHeader>,
    items: Vec<ItemReport<'a>>,
    totals: Totals,
}

#[derive(Serialize)]
struct ItemReport<'a> {
    #[serde(flatten)]
    item: &'a LineItem,
    total_price: Money,
}

impl<'a> ReceiptReport<'a> {
    fn new(receipt: &'a Receipt) -> Self {
        ReceiptReport {
            header: receipt.header(),
            items: receipt
                .items()
                .iter()
                .map(|item| ItemReport {
                    item,
                    total_price: item.total_price(),
                })
                .collect(),
            totals: receipt.compute_totals(),
        }
    }
}

// =============================================================================
// Command
// =============================================================================

/// Validates `args.file` and prints the result to `out`.
///
/// Rejections are reported on `out` as `ERROR: ...` and returned as
/// [`CheckOutcome::Rejected`]; only unexpected I/O failures are errors.
pub fn run_check<W: Write>(
    args: &CheckArgs,
    store: &ReceiptStore,
    now: NaiveDateTime,
    out: &mut W,
) -> CliResult<CheckOutcome> {
    let mut receipt = match store.load(&args.file, now) {
        Ok(receipt) => receipt,
        Err(err @ (LoadError::NotFound { .. } | LoadError::Parse(_))) => {
            warn!(file = %args.file.display(), "receipt rejected");
            writeln!(out, "ERROR: {err}")?;
            return Ok(CheckOutcome::Rejected);
        }
        Err(err) => return Err(err.into()),
    };

    if args.sort {
        receipt.sort_by_total_descending();
    }

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", format::render(&receipt))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &ReceiptReport::new(&receipt))?;
            writeln!(out)?;
        }
    }

    if let Some(name) = &args.output {
        match store.write(name, &receipt) {
            Ok(path) => info!(path = %path.display(), "result written"),
            Err(err @ (StoreError::IllegalFilename { .. } | StoreError::FileAlreadyExists { .. })) => {
                writeln!(out, "ERROR: {err}")?;
                return Ok(CheckOutcome::Rejected);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(CheckOutcome::Accepted)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use receipt_io::StoreConfig;
    use std::fs;
    use std::path::Path;

    const SAMPLE: &str = "1-23-4567-89 01/15/2024 14:30:00\napple 2 P10.00\nrice_5kg 1kg P50.00\n";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 20)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn args(file: PathBuf) -> CheckArgs {
        CheckArgs {
            file,
            sort: false,
            output: None,
            format: OutputFormat::Text,
        }
    }

    fn check(dir: &Path, args: &CheckArgs) -> (CheckOutcome, String) {
        let store = ReceiptStore::new(StoreConfig::new(dir));
        let mut out = Vec::new();
        let outcome = run_check(args, &store, now(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check_prints_render() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, SAMPLE).unwrap();

        let (outcome, out) = check(dir.path(), &args(input));
        assert_eq!(outcome, CheckOutcome::Accepted);
        assert_eq!(
            out,
            "1-23-4567-89 2024/01/15 02:30:00 PM\n\
             Apple 2 P10.00 P20.00\n\
             Rice_5kg 1kg P50.00 P50.00\n\
             P70.00 3_items\n"
        );
    }

    #[test]
    fn test_check_sort_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, SAMPLE).unwrap();

        let mut args = args(input);
        args.sort = true;
        args.output = Some("sorted.txt".to_string());

        let (outcome, out) = check(dir.path(), &args);
        assert_eq!(outcome, CheckOutcome::Accepted);

        let written = fs::read_to_string(dir.path().join("sorted.txt")).unwrap();
        assert_eq!(format!("{written}\n"), out);
        assert!(written.contains("Rice_5kg 1kg P50.00 P50.00\nApple 2 P10.00 P20.00"));

        let (outcome, out) = check(dir.path(), &args);
        assert_eq!(outcome, CheckOutcome::Rejected);
        assert!(out.ends_with("ERROR: File \"sorted.txt\" already exist. Please use a different filename.\n"));
    }

    #[test]
    fn test_check_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, SAMPLE).unwrap();

        let mut args = args(input);
        args.format = OutputFormat::Json;

        let (outcome, out) = check(dir.path(), &args);
        assert_eq!(outcome, CheckOutcome::Accepted);

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["header"]["receipt_number"], "1-23-4567-89");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["items"][0]["name"], "Apple");
        assert_eq!(json["totals"]["item_count"], 3);
    }

    #[test]
    fn test_check_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "1-23-4567-89 01/15/2024 14:30:00\napple two P10.00\n").unwrap();

        let (outcome, out) = check(dir.path(), &args(input));
        assert_eq!(outcome, CheckOutcome::Rejected);
        assert!(out.starts_with("ERROR: Invalid quantity at Line #2 (Apple, >>>two<<<, P10.00)."));
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (outcome, out) = check(dir.path(), &args(dir.path().join("missing.txt")));
        assert_eq!(outcome, CheckOutcome::Rejected);
        assert!(out.ends_with("is not found.\n"));
    }
}
