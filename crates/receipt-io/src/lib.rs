//! # receipt-io: File Layer for Receipt Checker
//!
//! This crate provides file access for the Receipt Checker system. The core
//! never opens a file; everything that touches the disk lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Checker Data Flow                           │
//! │                                                                         │
//! │  CLI ("Read from file" / "Write the results into a file")              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   receipt-io (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐                    │   │
//! │  │   │ ReceiptStore  │    │  Filename rules  │                    │   │
//! │  │   │ load / write  │───►│  [\w\-. ]+       │                    │   │
//! │  │   └───────┬───────┘    │  no overwrite    │                    │   │
//! │  │           │            └──────────────────┘                    │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  receipt-core (parse_document / render)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use receipt_io::{ReceiptStore, StoreConfig};
//!
//! let store = ReceiptStore::new(StoreConfig::new("."));
//! let receipt = store.load("INPUT.txt", Local::now().naive_local())?;
//! store.write("OUTPUT.txt", &receipt)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LoadError, StoreError};
pub use store::{validate_output_filename, ReceiptStore, StoreConfig};
