//! # Session State
//!
//! Everything one interactive run needs, handed to each command by
//! `&mut` reference.
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │     Console      │ │   ReceiptStore   │ │        now           │
//! │  prompts/answers │ │  load / write    │ │  header date check   │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

use chrono::NaiveDateTime;
use receipt_io::ReceiptStore;

use crate::console::Console;

/// State of one interactive run.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub store: ReceiptStore,

    /// Instant receipt headers must not be later than.
    pub now: NaiveDateTime,
}

impl<R, W> Session<R, W> {
    pub fn new(console: Console<R, W>, store: ReceiptStore, now: NaiveDateTime) -> Self {
        Session {
            console,
            store,
            now,
        }
    }
}
