//! # Receipt Checker CLI
//!
//! Library half of the `receipt-checker` binary; `main.rs` only calls
//! [`run`].
//!
//! ## Module Organization
//! ```text
//! receipt_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing, logging, dispatch)
//! ├── config.rs       ◄─── Environment configuration
//! ├── console.rs      ◄─── Prompt/answer I/O
//! ├── session.rs      ◄─── Interactive session state
//! ├── error.rs        ◄─── CLI error type
//! └── commands/
//!     ├── menu.rs     ◄─── Welcome menu
//!     ├── entry.rs    ◄─── Manual entry loop
//!     ├── confirm.rs  ◄─── Write / sort / discard
//!     └── check.rs    ◄─── Non-interactive check
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load CliConfig from the environment                                 │
//! │  3. Initialize tracing to stderr (RUST_LOG, else RECEIPT_LOG)           │
//! │  4. Build ReceiptStore (--output-dir overrides RECEIPT_OUTPUT_DIR)      │
//! │  5. Dispatch: `check` subcommand, or the interactive menu               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::check::CheckArgs;
use config::CliConfig;
use console::Console;
use receipt_io::{ReceiptStore, StoreConfig};
use session::Session;

/// Validate, total and sort purchase receipts.
#[derive(Debug, Parser)]
#[command(name = "receipt-checker", version)]
pub struct Cli {
    /// Directory new receipt files are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a receipt file without prompting
    Check(CheckArgs),
}

/// Runs the program against the real terminal.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.log_filter);
    info!(version = env!("CARGO_PKG_VERSION"), "receipt checker starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, &config, stdin.lock(), stdout.lock())
}

/// Dispatches parsed arguments over the given input and output.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    config: &CliConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<ExitCode> {
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| config.output_dir.clone());
    anyhow::ensure!(
        output_dir.is_dir(),
        "Output directory {} does not exist",
        output_dir.display()
    );
    let store = ReceiptStore::new(StoreConfig::new(output_dir));
    let now = config.now();

    match cli.command {
        Some(Command::Check(args)) => {
            let outcome = commands::check::run_check(&args, &store, now, &mut output)
                .with_context(|| format!("Failed to check {}", args.file.display()))?;
            Ok(outcome.exit_code())
        }
        None => {
            let mut session = Session::new(Console::new(input, output), store, now);
            commands::menu::run_menu(&mut session).context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Installs the global subscriber, writing to stderr so stdout carries only
/// the receipt.
///
/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "receipt-checker",
            "check",
            "input.txt",
            "--sort",
            "-o",
            "out.txt",
            "--format",
            "json",
            "--output-dir",
            "/tmp/receipts",
        ])
        .unwrap();

        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/receipts")));
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.file, PathBuf::from("input.txt"));
                assert!(args.sort);
                assert_eq!(args.output.as_deref(), Some("out.txt"));
                assert_eq!(args.format, commands::check::OutputFormat::Json);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_without_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["receipt-checker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(Cli::try_parse_from(["receipt-checker", "check"]).is_err());
    }

    #[test]
    fn test_output_dir_flag_overrides_config() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("input.txt");
        fs::write(
            &input,
            "1-23-4567-89 01/15/2024 14:30:00\napple 2 P10.00\n",
        )
        .unwrap();

        let argv: Vec<OsString> = vec![
            "receipt-checker".into(),
            "check".into(),
            input.clone().into_os_string(),
            "-o".into(),
            "out.txt".into(),
            "--output-dir".into(),
            out_dir.path().as_os_str().to_os_string(),
        ];
        let cli = Cli::try_parse_from(argv).unwrap();
        let config = CliConfig {
            output_dir: input_dir.path().to_path_buf(),
            ..CliConfig::default()
        };

        let mut out = Vec::new();
        execute(cli, &config, Cursor::new(Vec::new()), &mut out).unwrap();

        assert!(out_dir.path().join("out.txt").exists());
        assert!(!input_dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_missing_output_dir_flag_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let argv: Vec<OsString> = vec![
            "receipt-checker".into(),
            "--output-dir".into(),
            missing.clone().into_os_string(),
        ];
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        let err = execute(cli, &CliConfig::default(), Cursor::new(b"3\n".to_vec()), &mut out)
            .unwrap_err();

        assert!(err.to_string().contains("does not exist"));
        assert!(out.is_empty());
    }
}
