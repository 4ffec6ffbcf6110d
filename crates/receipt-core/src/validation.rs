//! # Validation Module
//!
//! Field grammars for every token on a receipt line.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt loop (CLI)                                            │
//! │  └── Re-prompts with THIS MODULE until a token is accepted             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Line parser                                                  │
//! │  ├── Field count (exactly 3)                                           │
//! │  └── THIS MODULE: one validator per field, fixed order                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Receipt model                                                │
//! │  └── Only ever holds values that passed Layer 2                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every grammar is written out by hand rather than as a regex so each
//! accepted/rejected shape is visible (and tested) on its own.
//!
//! | Field          | Grammar                                              |
//! |----------------|------------------------------------------------------|
//! | receipt number | `D-DD-DDDD-DD`                                       |
//! | time           | `([01]D\|2[0-3]):[0-5]D:[0-5]D`                       |
//! | date           | `MM/DD/YYYY` (calendar-checked)                       |
//! | item name      | one or more word characters or `_`                   |
//! | quantity       | `N` or `N[.DDD]unit`, unit ∈ g/kg/mL/L, never zero   |
//! | unit price     | `P[DDD][.DDD]`, at least one digit                    |
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{validate_item_name, validate_quantity};
//!
//! assert_eq!(validate_item_name("cat_food").unwrap(), "Cat_Food");
//! assert!(validate_quantity("0").is_err());
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Quantity, Unit};
use crate::CURRENCY_SYMBOL;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input format of the header date and time combined.
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

// =============================================================================
// Header Validators
// =============================================================================

/// Validates a receipt number of the form `D-DD-DDDD-DD`.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt_number;
///
/// assert!(validate_receipt_number("1-23-4567-89").is_ok());
/// assert!(validate_receipt_number("12-3-4567-89").is_err());
/// ```
pub fn validate_receipt_number(s: &str) -> ValidationResult<String> {
    const GROUP_WIDTHS: [usize; 4] = [1, 2, 4, 2];

    let groups: Vec<&str> = s.split('-').collect();
    let well_formed = groups.len() == GROUP_WIDTHS.len()
        && groups
            .iter()
            .zip(GROUP_WIDTHS)
            .all(|(group, width)| group.len() == width && group.bytes().all(|b| b.is_ascii_digit()));

    if !well_formed {
        return Err(ValidationError::InvalidReceiptNumber {
            value: s.to_string(),
        });
    }

    Ok(s.to_string())
}

/// Validates the header date and time against the validation instant.
///
/// ## Rules
/// - Time must be `HH:MM:SS` on a 24-hour clock, zero-padded
/// - Date must be a real `MM/DD/YYYY` calendar date with an unsigned
///   4-digit year
/// - The combined instant must not be after `now`
///
/// ## Returns
/// The combined date and time.
pub fn validate_date_time(date: &str, time: &str, now: NaiveDateTime) -> ValidationResult<NaiveDateTime> {
    let format_error = || ValidationError::InvalidDateTimeFormat {
        date: date.to_string(),
        time: time.to_string(),
    };

    if !is_clock_time(time) || !has_four_digit_year(date) {
        return Err(format_error());
    }

    let issued_at = NaiveDateTime::parse_from_str(&format!("{date} {time}"), DATE_TIME_FORMAT)
        .map_err(|_| format_error())?;

    if issued_at > now {
        return Err(ValidationError::FutureDateTime {
            date: date.to_string(),
            time: time.to_string(),
        });
    }

    Ok(issued_at)
}

/// `([01]\d|2[0-3]):[0-5]\d:[0-5]\d`
fn is_clock_time(time: &str) -> bool {
    let b = time.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b':' {
        return false;
    }

    let hour_ok = matches!((b[0], b[1]), (b'0'..=b'1', b'0'..=b'9') | (b'2', b'0'..=b'3'));
    let minute_ok = matches!((b[3], b[4]), (b'0'..=b'5', b'0'..=b'9'));
    let second_ok = matches!((b[6], b[7]), (b'0'..=b'5', b'0'..=b'9'));

    hour_ok && minute_ok && second_ok
}

/// The part after the last `/` is exactly `\d{4}`.
fn has_four_digit_year(date: &str) -> bool {
    date.rsplit_once('/')
        .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

// =============================================================================
// Entry Validators
// =============================================================================

/// Validates and normalizes an item name.
///
/// ## Rules
/// - At least one character
/// - Only word characters (letters, digits) and underscores
///
/// ## Normalization
/// Each `_`-separated segment gets its first character upper-cased; the
/// rest of the segment is left as given. Normalizing twice is a no-op.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("cat_food").unwrap(), "Cat_Food");
/// assert_eq!(validate_item_name("iPhone_case").unwrap(), "IPhone_Case");
/// assert!(validate_item_name("cat food").is_err());
/// ```
pub fn validate_item_name(s: &str) -> ValidationResult<String> {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';

    if s.is_empty() || !s.chars().all(is_word_char) {
        return Err(ValidationError::InvalidItemName {
            value: s.to_string(),
        });
    }

    Ok(s.split('_').map(capitalize_first).collect::<Vec<_>>().join("_"))
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validates a quantity token.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "3"       ✅ Count(3)                                                  │
/// │  "12kg"    ✅ Measured 12 kg                                            │
/// │  "0.5kg"   ✅ Measured 0.5 kg                                           │
/// │  "0.5"     ❌ a fraction needs a unit                                   │
/// │  "0", "0kg", "0.00L"  ❌ purely zero                                    │
/// │  "05", "00.5g"        ❌ leading zero on the whole part                 │
/// │  "5KG", "5ml"         ❌ unit suffixes are case-sensitive               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// A doubled or chained suffix (`0.5kgkg`, `1.5gL`) is rejected; exactly one
/// unit may follow the number.
///
/// ## Range
/// Counts above `u64::MAX` and measured amounts beyond the 28 significant
/// digits of `Decimal` are rejected as `InvalidQuantity` rather than rounded.
pub fn validate_quantity(s: &str) -> ValidationResult<Quantity> {
    let invalid = || ValidationError::InvalidQuantity {
        value: s.to_string(),
    };

    let (number, unit) = match Unit::strip_suffix(s) {
        Some((number, unit)) => (number, Some(unit)),
        None => (s, None),
    };

    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };

    if !is_whole_number(whole) {
        return Err(invalid());
    }

    if let Some(fraction) = fraction {
        if unit.is_none() || !is_digits(fraction) {
            return Err(invalid());
        }
    }

    match unit {
        None => {
            let count: u64 = whole.parse().map_err(|_| invalid())?;
            if count == 0 {
                return Err(invalid());
            }
            Ok(Quantity::Count(count))
        }
        Some(unit) => {
            let amount = Decimal::from_str_exact(number).map_err(|_| invalid())?;
            if amount.is_zero() {
                return Err(invalid());
            }
            Ok(Quantity::Measured { amount, unit })
        }
    }
}

/// `0` or `[1-9]\d*`
fn is_whole_number(s: &str) -> bool {
    s == "0" || (is_digits(s) && !s.starts_with('0'))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a unit price and strips the currency marker.
///
/// ## Rules
/// - Must start with `P`
/// - Then an optional whole part and an optional `.` + fraction
/// - At least one digit overall (`P` alone is rejected)
///
/// ## Range
/// Amounts beyond the 28 significant digits of `Decimal` are rejected as
/// `InvalidUnitPrice` rather than rounded.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_unit_price;
///
/// assert_eq!(validate_unit_price("P250.46").unwrap().to_string(), "P250.46");
/// assert_eq!(validate_unit_price("P.5").unwrap().to_string(), "P0.50");
/// assert!(validate_unit_price("250.46").is_err());
/// ```
pub fn validate_unit_price(s: &str) -> ValidationResult<Money> {
    let invalid = || ValidationError::InvalidUnitPrice {
        value: s.to_string(),
    };

    let digits = s.strip_prefix(CURRENCY_SYMBOL).ok_or_else(invalid)?;

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let whole_ok = whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.map_or(true, is_digits);
    if !whole_ok || !fraction_ok || (whole.is_empty() && fraction.is_none()) {
        return Err(invalid());
    }

    let amount = if whole.is_empty() {
        Decimal::from_str_exact(&format!("0{digits}"))
    } else {
        Decimal::from_str_exact(digits)
    }
    .map_err(|_| invalid())?;

    Ok(Money::new(amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
