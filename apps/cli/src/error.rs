//! # CLI Error Type
//!
//! Unified error type for the command modules.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Expected failures (bad field, missing file, taken filename)           │
//! │      └──► printed as "ERROR: ..." and the prompt repeats or the        │
//! │           session ends; never surface as CliError                      │
//! │                                                                         │
//! │  Unexpected failures (console broken, unreadable file, disk full)      │
//! │      └──► CliError ──► anyhow at main ──► stderr, exit code 1          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipt_io::{LoadError, StoreError};
use std::io;
use thiserror::Error;

/// Failure that ends the current session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Could not encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command functions.
pub type CliResult<T> = Result<T, CliError>;
