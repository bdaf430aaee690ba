//! # Validation Module
//!
//! Checkout rules and parsing of typed-in counter input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompt                                              │
//! │  ├── parse_count / parse_date / parse_order_id                         │
//! │  └── ValidationError → "Invalid integer value: abc"                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout orchestrator                                        │
//! │  ├── validate_rental_days → CoreError::InvalidRentalDay                │
//! │  └── validate_discount    → CoreError::InvalidDiscount                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calendar                                                     │
//! │  └── start < end          → CoreError::InvalidDateRange                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use depot_core::validation::{parse_count, parse_date, validate_discount};
//!
//! let days = parse_count("5").unwrap();
//! let date = parse_date("7/2/20").unwrap();
//! assert_eq!(date.to_string(), "2020-07-02");
//! assert!(validate_discount(101).is_err());
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CheckoutRequest, OrderId, Tool};
use crate::{MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT, MIN_RENTAL_DAYS};

/// Result type for boundary parsing.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest tool code the catalog accepts.
pub const MAX_TOOL_CODE_LEN: usize = 16;

// =============================================================================
// Checkout Rules
// =============================================================================

/// Rental must be at least one day.
pub fn validate_rental_days(rental_days: i64) -> CoreResult<()> {
    if rental_days < MIN_RENTAL_DAYS {
        return Err(CoreError::InvalidRentalDay {
            requested: rental_days,
        });
    }
    Ok(())
}

/// Discount must be 0-100 inclusive.
pub fn validate_discount(discount_percent: i64) -> CoreResult<()> {
    if !(MIN_DISCOUNT_PERCENT..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
        return Err(CoreError::InvalidDiscount {
            requested: discount_percent,
        });
    }
    Ok(())
}

/// Runs the per-request rules, rental days first.
pub fn validate_request(request: &CheckoutRequest) -> CoreResult<()> {
    validate_rental_days(request.rental_days)?;
    validate_discount(request.discount_percent)
}

// =============================================================================
// Inventory Rules
// =============================================================================

/// Validates a tool code (`CHNS`, `LADW`, ...).
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_TOOL_CODE_LEN`] characters
/// - ASCII letters and digits only
pub fn validate_tool_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "tool code".to_string(),
        });
    }

    if code.len() > MAX_TOOL_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "tool code".to_string(),
            max: MAX_TOOL_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "tool code".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a tool before it enters the catalog.
pub fn validate_tool(tool: &Tool) -> ValidationResult<()> {
    validate_tool_code(&tool.code)?;
    validate_daily_charge(tool.price.daily_charge)
}

/// Daily charge must be a positive amount.
pub fn validate_daily_charge(daily_charge: Money) -> ValidationResult<()> {
    if !daily_charge.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "daily charge".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Boundary Parsing
// =============================================================================

/// Parses a non-negative whole number typed at the counter.
///
/// Only ASCII digits are accepted: no sign, no spaces inside.
pub fn parse_count(value: &str) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidInteger(value.to_string());

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

/// Parses a checkout date in `M/d/yy` form.
///
/// Month and day take one or two digits; the year takes exactly two and
/// lands in 2000-2099. Blank input gets its own message.
pub fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingDate(value.to_string()));
    }
    let invalid = || ValidationError::InvalidDate(value.to_string());

    let parts: Vec<&str> = value.split('/').collect();
    let &[month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    if !digits(month, 1, 2) || !digits(day, 1, 2) || !digits(year, 2, 2) {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(invalid)
}

/// Parses an order id typed at the lookup prompt.
pub fn parse_order_id(value: &str) -> ValidationResult<OrderId> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingUuid(value.to_string()));
    }
    Uuid::parse_str(value.trim())
        .map(OrderId::from_uuid)
        .map_err(|_| ValidationError::InvalidUuid(value.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
