//! # Error Types
//!
//! Domain-specific error types for depot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  depot-core errors (this file)                                         │
//! │  ├── CoreError        - Request-level rental failures                  │
//! │  └── ValidationError  - Malformed input at the boundary                │
//! │                                                                         │
//! │  depot-store errors (separate crate)                                   │
//! │  └── StoreError       - Catalog/ledger failures                        │
//! │                                                                         │
//! │  terminal errors (in app)                                              │
//! │  └── TerminalError    - Config, I/O, plus everything above             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → message on stderr │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant except `Store` is request-level: the terminal prints the
//! message and keeps accepting input.

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rental checkout errors.
///
/// Apart from `Store`, these are deterministic validation failures, so
/// nothing in the crate retries on them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed numeric, date or identifier input.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Rental day count below one.
    #[error("Rental days must be 1 or more days")]
    InvalidRentalDay { requested: i64 },

    /// Discount percentage outside 0..=100.
    #[error("Discount percent must be between 0 and 100")]
    InvalidDiscount { requested: i64 },

    /// Unknown tool code at checkout.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter the tool code: LADX
    ///      │
    ///      ▼
    /// catalog.find_by_code("LADX") → None
    ///      │
    ///      ▼
    /// ToolNotFound("LADX")
    ///      │
    ///      ▼
    /// Terminal shows: Tool with code "LADX" not found
    /// ```
    #[error("Tool with code \"{0}\" not found")]
    ToolNotFound(String),

    /// Start date not strictly before end date.
    #[error("Start date must be before end date")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The rental charge does not fit in the money range.
    ///
    /// Only reachable with a daily charge far beyond any real price.
    #[error("Rental charge is too large to compute")]
    ChargeOverflow { daily_charge_cents: i64, charge_days: u32 },

    /// A store implementation failed to serve a lookup or insert.
    #[error("Store error: {0}")]
    Store(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Boundary input errors (parsing typed-in text).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a non-negative whole number.
    #[error("Invalid integer value: {0}")]
    InvalidInteger(String),

    /// Blank date.
    #[error("Invalid date value: {0}")]
    MissingDate(String),

    /// Not a date in M/d/yy form.
    #[error("Invalid date format: {0}. Expected format: mm/dd/yy")]
    InvalidDate(String),

    /// Blank order id.
    #[error("Invalid UUID value: {0}")]
    MissingUuid(String),

    /// Order id that is not a UUID.
    #[error("Invalid UUID format: {0}")]
    InvalidUuid(String),

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format for a named field.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
