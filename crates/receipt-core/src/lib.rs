//! # receipt-core: Pure Business Logic for Receipt Checker
//!
//! This crate is the **heart** of Receipt Checker. It turns raw receipt lines
//! into a validated, ordered receipt and renders it back out, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Checker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-checker (CLI)                        │   │
//! │  │    Menu ──► Prompt loop ──► Confirm (write / sort / discard)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               receipt-io (read lines, write render)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐   │   │
//! │  │   │ validation │  │  parser  │  │ receipt  │  │   format   │   │   │
//! │  │   │  grammars  │─►│  lines   │─►│  model   │─►│   render   │   │   │
//! │  │   └────────────┘  └──────────┘  └────┬─────┘  └────────────┘   │   │
//! │  │                                      │                          │   │
//! │  │                          ┌───────────▼──────────┐               │   │
//! │  │                          │ money + totals       │               │   │
//! │  │                          │ round-half-up engine │               │   │
//! │  │                          └──────────────────────┘               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Field grammars (receipt number, date/time, name, quantity, price)
//! - [`parser`] - Line and whole-document parsing
//! - [`types`] - Domain types (ReceiptHeader, LineItem, Quantity, Unit)
//! - [`receipt`] - The ordered receipt model and its sort
//! - [`money`] - Decimal money with round-half-up
//! - [`totals`] - Step-wise running total and item count
//! - [`format`] - Canonical text rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the clock is an argument, never read here
//! 2. **No I/O**: file system and terminal access is FORBIDDEN here
//! 3. **Decimal Money**: prices and totals are `rust_decimal::Decimal`, never floats
//! 4. **Explicit Errors**: every failure is a typed value, never a process exit
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use receipt_core::{format, parser};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 20)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let text = "1-23-4567-89 01/15/2024 14:30:00\napple 2 P10.00\nrice_5kg 1kg P50.00";
//! let receipt = parser::parse_document(text, now).unwrap();
//!
//! assert!(format::render(&receipt).ends_with("P70.00 3_items"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Money` instead of
// `use receipt_core::money::Money`

pub use error::{ErrorKind, ParseError, ValidationError};
pub use money::Money;
pub use parser::{LineRole, ParsedLine};
pub use receipt::{Receipt, ReceiptEntry};
pub use totals::Totals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The single currency marker used on input and output (`P250.46`).
pub const CURRENCY_SYMBOL: char = 'P';

/// Number of whitespace-separated fields on every receipt line.
pub const FIELDS_PER_LINE: usize = 3;

/// Fractional digits kept on every monetary value that leaves the engine.
pub const MONEY_SCALE: u32 = 2;
