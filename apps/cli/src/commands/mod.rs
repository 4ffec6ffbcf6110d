//! # Commands Module
//!
//! One module per user-facing action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared prompt texts)
//! ├── menu.rs     ◄─── Welcome menu: read file / enter manually / exit
//! ├── entry.rs    ◄─── Manual entry loop
//! ├── confirm.rs  ◄─── Display, then write / sort / discard
//! └── check.rs    ◄─── Non-interactive `check FILE`
//! ```
//!
//! ## Interactive Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  menu ──1──► filename ──► ReceiptStore::load ──┐                       │
//! │    │                                            │                       │
//! │    ├──2──► entry loop (validate each field) ───┤                       │
//! │    │                                            ▼                       │
//! │    └──3──► exit                         confirm: display               │
//! │                                            1 write ──► filename loop   │
//! │                                            2 sort  ──► display again   │
//! │                                            3 discard                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod check;
pub mod confirm;
pub mod entry;
pub mod menu;

/// Shown when a menu answer is not a whole number.
pub const INVALID_NUMBER: &str = "Invalid value. Please enter a correct number.";

/// Prompt before a menu answer.
pub const ENTER_NUM: &str = "Enter num: ";
