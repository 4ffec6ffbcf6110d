//! # Line Parser
//!
//! Turns raw receipt lines into validated headers and line items.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line 1      1-23-4567-89  01/15/2024  14:30:00      ◄── Header        │
//! │  Line 2..N   apple         2           P10.00        ◄── Entry         │
//! │              rice_5kg      1kg         P50.00                           │
//! │                                                                         │
//! │  Every line: exactly 3 whitespace-separated fields.                    │
//! │  First failure aborts the WHOLE document; nothing partial comes back.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{ParseError, ValidationError};
use crate::receipt::Receipt;
use crate::types::{LineItem, ReceiptHeader};
use crate::FIELDS_PER_LINE;

/// Which kind of line is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// Receipt number, date, time.
    Header,
    /// Item name, quantity, unit price.
    Entry,
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRole::Header => write!(f, "header"),
            LineRole::Entry => write!(f, "entry"),
        }
    }
}

/// A successfully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Header(ReceiptHeader),
    Entry(LineItem),
}

/// Parses one line in the given role.
///
/// `line_index` is 0-based; errors report `line_index + 1`. `now` is the
/// instant header dates are checked against (unused for entries).
///
/// ## Order of Checks
/// 1. Field count (`MissingFields` / `TooManyFields`)
/// 2. Header: receipt number, then date/time
///    Entry: item name, then quantity, then unit price
pub fn parse_line(
    raw: &str,
    line_index: usize,
    role: LineRole,
    now: NaiveDateTime,
) -> Result<ParsedLine, ParseError> {
    let line = line_index + 1;
    let fields: Vec<&str> = raw.split_whitespace().collect();

    if fields.len() > FIELDS_PER_LINE {
        return Err(ParseError::TooManyFields {
            line,
            role,
            raw: raw.to_string(),
        });
    }
    if fields.len() < FIELDS_PER_LINE {
        return Err(ParseError::MissingFields {
            line,
            role,
            raw: raw.to_string(),
        });
    }

    let field_error = |fields: Vec<String>, source: ValidationError| ParseError::InvalidField {
        line,
        role,
        fields,
        source,
    };

    match role {
        LineRole::Header => ReceiptHeader::from_fields(fields[0], fields[1], fields[2], now)
            .map(ParsedLine::Header)
            .map_err(|source| field_error(owned(&fields), source)),
        LineRole::Entry => parse_entry(&fields)
            .map(ParsedLine::Entry)
            .map_err(|(fields, source)| field_error(fields, source)),
    }
}

/// Entry fields in order; once the name passes, diagnostics show it normalized.
fn parse_entry(fields: &[&str]) -> Result<LineItem, (Vec<String>, ValidationError)> {
    let name = crate::validation::validate_item_name(fields[0])
        .map_err(|source| (owned(fields), source))?;

    let seen = vec![name.clone(), fields[1].to_string(), fields[2].to_string()];
    let quantity =
        crate::validation::validate_quantity(fields[1]).map_err(|source| (seen.clone(), source))?;
    let unit_price =
        crate::validation::validate_unit_price(fields[2]).map_err(|source| (seen, source))?;

    Ok(LineItem::new(name, quantity, unit_price))
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

// =============================================================================
// Whole-Document Parsing
// =============================================================================

/// Parses a full receipt: the first line is the header, the rest are entries.
///
/// Stops at the first failing line and returns only that error. An empty
/// sequence yields an empty receipt with no header.
pub fn parse_receipt<'a, I>(lines: I, now: NaiveDateTime) -> Result<Receipt, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut receipt = Receipt::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let role = if index == 0 {
            LineRole::Header
        } else {
            LineRole::Entry
        };

        match parse_line(raw, index, role, now) {
            Ok(parsed) => receipt.append_entry(parsed),
            Err(err) => {
                debug!(line = err.line(), kind = ?err.kind(), "receipt rejected");
                return Err(err);
            }
        }
    }

    debug!(entries = receipt.len(), "receipt parsed");
    Ok(receipt)
}

/// Parses receipt text already read into memory.
pub fn parse_document(text: &str, now: NaiveDateTime) -> Result<Receipt, ParseError> {
    parse_receipt(text.lines(), now)
}

// =============================================================================
// Unit Tests
// =============================================================================
