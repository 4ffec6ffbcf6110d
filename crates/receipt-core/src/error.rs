//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ValidationError  - One token failed its grammar                   │
//! │  └── ParseError       - A line failed; carries line number + fields    │
//! │                                                                         │
//! │  receipt-io errors (separate crate)                                    │
//! │  ├── LoadError        - Reading a receipt file                         │
//! │  └── StoreError       - Filename / collision / write failures          │
//! │                                                                         │
//! │  Flow: ValidationError → ParseError → LoadError → CLI prints ERROR     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line number, offending field)
//! 3. Errors are enum variants, never String
//! 4. Every variant is terminal for the document being processed

use thiserror::Error;

use crate::parser::LineRole;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failed its grammar.
///
/// Each variant keeps the raw value so callers (the prompt loop, the line
/// parser) can build their own diagnostics around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid receipt number. {}", Self::RECEIPT_NUMBER_HINT)]
    InvalidReceiptNumber { value: String },

    /// The date or time token does not parse.
    #[error("Invalid date/time. {}", Self::DATE_TIME_HINT)]
    InvalidDateTimeFormat { date: String, time: String },

    /// The date and time parse but lie after the validation instant.
    #[error("Invalid date/time. The date and time is set in the future.")]
    FutureDateTime { date: String, time: String },

    #[error("Invalid item name. {}", Self::ITEM_NAME_HINT)]
    InvalidItemName { value: String },

    #[error("Invalid quantity. {}", Self::QUANTITY_HINT)]
    InvalidQuantity { value: String },

    #[error("Invalid unit price. {}", Self::UNIT_PRICE_HINT)]
    InvalidUnitPrice { value: String },
}

impl ValidationError {
    const RECEIPT_NUMBER_HINT: &'static str = "Ensure that the receipt number is in correct format \
        (i.e., x-xx-xxxx-xx, where x is a positive whole number).";
    const DATE_TIME_HINT: &'static str = "Either date is not in proper MM/DD/YYYY format \
        or time is not in HH:mm:SS format.";
    const ITEM_NAME_HINT: &'static str = "Item name must only include letters and numbers \
        and can only be separated by underscore.";
    const QUANTITY_HINT: &'static str = "Quantity must be a positive integer (1 and above) \
        or a combination of positive integer/floating number and a unit (i.e., g, kg, mL, or L).";
    const UNIT_PRICE_HINT: &'static str =
        "Ensure that it is in correct format (e.g., P250.46, P100.00)";

    /// Flat taxonomy tag for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidReceiptNumber { .. } => ErrorKind::InvalidReceiptNumber,
            ValidationError::InvalidDateTimeFormat { .. } => ErrorKind::InvalidDateTimeFormat,
            ValidationError::FutureDateTime { .. } => ErrorKind::FutureDateTime,
            ValidationError::InvalidItemName { .. } => ErrorKind::InvalidItemName,
            ValidationError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            ValidationError::InvalidUnitPrice { .. } => ErrorKind::InvalidUnitPrice,
        }
    }

    /// Human name of the field, as used in diagnostics.
    pub fn field_label(&self) -> &'static str {
        match self {
            ValidationError::InvalidReceiptNumber { .. } => "receipt number",
            ValidationError::InvalidDateTimeFormat { .. }
            | ValidationError::FutureDateTime { .. } => "date/time",
            ValidationError::InvalidItemName { .. } => "item name",
            ValidationError::InvalidQuantity { .. } => "quantity",
            ValidationError::InvalidUnitPrice { .. } => "unit price",
        }
    }

    /// The explanatory sentence shown after the failure.
    pub fn hint(&self) -> &'static str {
        match self {
            ValidationError::InvalidReceiptNumber { .. } => Self::RECEIPT_NUMBER_HINT,
            ValidationError::InvalidDateTimeFormat { .. } => Self::DATE_TIME_HINT,
            ValidationError::FutureDateTime { .. } => "The date and time is set in the future.",
            ValidationError::InvalidItemName { .. } => Self::ITEM_NAME_HINT,
            ValidationError::InvalidQuantity { .. } => Self::QUANTITY_HINT,
            ValidationError::InvalidUnitPrice { .. } => Self::UNIT_PRICE_HINT,
        }
    }

    /// Position of the offending token within its 3-field line.
    fn field_index(&self) -> usize {
        match self {
            ValidationError::InvalidReceiptNumber { .. } | ValidationError::InvalidItemName { .. } => 0,
            ValidationError::InvalidDateTimeFormat { .. }
            | ValidationError::FutureDateTime { .. }
            | ValidationError::InvalidQuantity { .. } => 1,
            ValidationError::InvalidUnitPrice { .. } => 2,
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// A receipt line failed; the whole document is abandoned.
///
/// `line` is always 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than three fields on the line.
    #[error("{}", missing_fields_message(.line, .role, .raw))]
    MissingFields {
        line: usize,
        role: LineRole,
        raw: String,
    },

    /// More than three fields on the line.
    #[error("{}", too_many_fields_message(.line, .role, .raw))]
    TooManyFields {
        line: usize,
        role: LineRole,
        raw: String,
    },

    /// Field count was right but one field failed its grammar.
    ///
    /// `fields` holds the line's fields as the failing validator saw them
    /// (the item name is already normalized once it has passed).
    #[error("{}", invalid_field_message(.line, .role, .fields, .source))]
    InvalidField {
        line: usize,
        role: LineRole,
        fields: Vec<String>,
        #[source]
        source: ValidationError,
    },
}

impl ParseError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingFields { line, .. }
            | ParseError::TooManyFields { line, .. }
            | ParseError::InvalidField { line, .. } => *line,
        }
    }

    pub fn role(&self) -> LineRole {
        match self {
            ParseError::MissingFields { role, .. }
            | ParseError::TooManyFields { role, .. }
            | ParseError::InvalidField { role, .. } => *role,
        }
    }

    /// Flat taxonomy tag for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingFields { .. } => ErrorKind::MissingFields,
            ParseError::TooManyFields { .. } => ErrorKind::TooManyFields,
            ParseError::InvalidField { source, .. } => source.kind(),
        }
    }
}

const CANCELLED: &str = "Receipt registration will be cancelled.";

fn missing_fields_message(line: &usize, role: &LineRole, raw: &str) -> String {
    match role {
        LineRole::Header => format!(
            "Header line lacks at least one required values (i.e., receipt number, date, or, time). {CANCELLED}"
        ),
        LineRole::Entry if raw.trim().is_empty() => format!(
            "Receipt entry at Line #{line} lacks at least one required values \
             (i.e., item name, quantity, or unit price). {CANCELLED}"
        ),
        LineRole::Entry => format!(
            "Receipt entry at Line #{line} ({raw}) lacks at least one required values \
             (i.e., item name, quantity, or unit price). {CANCELLED}"
        ),
    }
}

fn too_many_fields_message(line: &usize, role: &LineRole, raw: &str) -> String {
    match role {
        LineRole::Header => format!(
            "Multiple values found in the header line of text file. Please ensure that receipt number, \
             date, and, time are the only values at the header line. {CANCELLED}"
        ),
        LineRole::Entry => format!(
            "Multiple values found in the receipt entry placed at Line #{line} ({raw}) of text file. \
             Please ensure that each line of receipt entry contains only the item name, quantity, \
             and unit price. {CANCELLED}"
        ),
    }
}

fn invalid_field_message(
    line: &usize,
    role: &LineRole,
    fields: &[String],
    source: &ValidationError,
) -> String {
    match role {
        LineRole::Header => format!("{source} {CANCELLED}"),
        LineRole::Entry => {
            let marked = source.field_index();
            let context = fields
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == marked {
                        format!(">>>{field}<<<")
                    } else {
                        field.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Invalid {} at Line #{line} ({context}). {}",
                source.field_label(),
                source.hint()
            )
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Flat tag over every core failure, for callers that branch on the category
/// rather than the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingFields,
    TooManyFields,
    InvalidReceiptNumber,
    InvalidDateTimeFormat,
    FutureDateTime,
    InvalidItemName,
    InvalidQuantity,
    InvalidUnitPrice,
}

// =============================================================================
// Unit Tests
// =============================================================================
