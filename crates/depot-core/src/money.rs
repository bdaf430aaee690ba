//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    9.95 × 0.10 = 0.9950000000000001 or 0.99499999... depending on path │
//! │    → the half-up rounding of the discount can land on either cent      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    995 cents × 10% = 9950 / 100 = 99.50 cents → half-up → 100 cents    │
//! │    The half is seen exactly, so it always rounds the same way           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use depot_core::money::Money;
//!
//! // Create from cents (preferred)
//! let daily = Money::from_cents(149); // $1.49
//!
//! // Arithmetic is checked: None means the amount left the i64 range
//! let three_days = daily.checked_times(3).unwrap();          // $4.47
//! let discount = three_days.percent_half_up(25);              // $1.1175 → $1.12
//! assert_eq!(three_days.checked_sub(discount).unwrap().cents(), 335);
//!
//! // Parsed from config text
//! let ladder: Money = "$2.49".parse().unwrap();
//! assert_eq!(ladder.cents(), 249);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (USD only).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for intermediate differences
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: `{"daily_charge": 199}`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Price.daily_charge ──► × charge days ──► pre-discount amount           │
/// │                                              │                          │
/// │                          discount % ─────────┤                          │
/// │                                              ▼                          │
/// │                               discount amount (half-up)                 │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                         final charge = pre-discount − discount          │
/// │                                                                         │
/// │  All four appear on the rental agreement as "$1,234.56"                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use depot_core::money::Money;
    ///
    /// let price = Money::from_cents(199); // Represents $1.99
    /// assert_eq!(price.cents(), 199);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a whole number of days.
    ///
    /// A cent amount times an integer is exact at two decimal places, so
    /// there is nothing to round. Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use depot_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(299).checked_times(3).unwrap().cents(), 897);
    /// assert!(Money::from_cents(i64::MAX / 2).checked_times(3).is_none());
    /// ```
    #[inline]
    pub const fn checked_times(&self, days: i64) -> Option<Self> {
        match self.0.checked_mul(days) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts another amount. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Takes `percent`% of this amount, rounded half-up to the cent.
    ///
    /// For `percent` in 0..=100 the result is never larger in magnitude
    /// than `self`, so it cannot overflow.
    ///
    /// ## Round Half Up
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  exact = cents × percent / 100   (computed in i128, no overflow)    │
    /// │                                                                     │
    /// │  99.50 cents → 100      99.49 cents → 99                            │
    /// │  -99.50 cents → -100    (halves go away from zero)                  │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use depot_core::money::Money;
    ///
    /// // $9.95 × 10% = $0.995 → $1.00
    /// assert_eq!(Money::from_cents(995).percent_half_up(10).cents(), 100);
    /// ```
    pub fn percent_half_up(&self, percent: i64) -> Money {
        let scaled = self.0 as i128 * percent as i128;
        let magnitude = (scaled.abs() + 50) / 100;
        let cents = if scaled < 0 { -magnitude } else { magnitude };
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency display: `$1,234.56`, `-$5.50`.
///
/// This is the format printed on rental agreements, so it is part of the
/// agreement text contract.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}.{:02}", sign, grouped, self.cents_part())
    }
}

/// Parses `1.49`, `$1.49`, `1,234.5` or `12`.
///
/// At most two decimal places are accepted; anything finer than a cent is
/// rejected rather than rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' {}", s, reason),
        };

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let (major, minor) = match rest.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (rest.as_str(), ""),
        };

        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("is not a dollar amount"));
        }
        if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must have at most two decimal places"));
        }

        let dollars: i64 = major
            .parse()
            .map_err(|_| invalid("is too large"))?;
        let cents: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("is not a dollar amount"))? * 10,
            _ => minor.parse().map_err(|_| invalid("is not a dollar amount"))?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(199).to_string(), "$1.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
        assert_eq!(Money::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(-1_000_000).to_string(), "-$10,000.00");
    }

    #[test]
    fn test_times_is_exact() {
        assert_eq!(Money::from_cents(199).checked_times(5), Some(Money::from_cents(995)));
        assert_eq!(Money::from_cents(149).checked_times(0), Some(Money::zero()));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_times(3), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_times(1), Some(Money::from_cents(i64::MAX)));
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(1000).checked_sub(Money::from_cents(500)),
            Some(Money::from_cents(500))
        );
    }

    #[test]
    fn test_percent_of_largest_amount() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.percent_half_up(100), max);
        assert_eq!(max.percent_half_up(0), Money::zero());
    }

    #[test]
    fn test_percent_half_up_rounds_half_away_from_zero() {
        // $9.95 × 10% = 99.5 cents
        assert_eq!(Money::from_cents(995).percent_half_up(10).cents(), 100);
        // $4.47 × 25% = 111.75 cents
        assert_eq!(Money::from_cents(447).percent_half_up(25).cents(), 112);
        // $8.97 × 50% = 448.5 cents
        assert_eq!(Money::from_cents(897).percent_half_up(50).cents(), 449);
        // 99.49 cents stays down
        assert_eq!(Money::from_cents(9949).percent_half_up(1).cents(), 99);
        assert_eq!(Money::from_cents(-995).percent_half_up(10).cents(), -100);
    }

    #[test]
    fn test_percent_bounds() {
        let amount = Money::from_cents(1234);
        assert_eq!(amount.percent_half_up(0), Money::zero());
        assert_eq!(amount.percent_half_up(100), amount);
    }

    #[test]
    fn test_parse() {
        assert_eq!("1.49".parse::<Money>().unwrap().cents(), 149);
        assert_eq!("$2.99".parse::<Money>().unwrap().cents(), 299);
        assert_eq!("1,234.5".parse::<Money>().unwrap().cents(), 123_450);
        assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("-$0.05".parse::<Money>().unwrap().cents(), -5);
    }

    #[test]
    fn test_parse_rejects_garbage_and_sub_cent() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.999".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("1.-5".parse::<Money>().is_err());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(149)).unwrap();
        assert_eq!(json, "149");
        let back: Money = serde_json::from_str("299").unwrap();
        assert_eq!(back.cents(), 299);
    }
}
