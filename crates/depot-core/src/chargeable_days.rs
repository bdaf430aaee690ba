//! # Chargeable Day Classifier
//!
//! Buckets every day of a rental into weekday, weekend or holiday.
//!
//! ## Which Days Count
//! ```text
//! checkout ─┐                                   ┌─ due date
//!           ▼                                   ▼
//!        Thu 7/2   Fri 7/3   Sat 7/4   Sun 7/5
//!        (free)    holiday   weekend   weekend
//!                  └───────── classified ───────┘
//! ```
//! The checkout day itself is never classified. A holiday that lands on a
//! weekend date is a holiday, not a weekend day; no day is counted twice.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::holiday::{ensure_ordered, holidays_between};

/// Weekday/weekend/holiday counts for one date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeableDays {
    pub weekdays: u32,
    pub weekends: u32,
    pub holidays: u32,
}

impl ChargeableDays {
    /// Total classified days (equals the number of days in the range).
    pub const fn total(&self) -> u32 {
        self.weekdays + self.weekends + self.holidays
    }
}

/// Classifies each day after `start` through `end` inclusive.
///
/// ## Errors
/// [`CoreError::InvalidDateRange`] unless `start < end`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use depot_core::chargeable_days::classify;
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2020, 7, 5).unwrap();
/// let days = classify(checkout, due).unwrap();
///
/// assert_eq!((days.weekdays, days.weekends, days.holidays), (0, 2, 1));
/// ```
pub fn classify(start: NaiveDate, end: NaiveDate) -> CoreResult<ChargeableDays> {
    ensure_ordered(start, end)?;
    let holidays = holidays_between(start, end)?;

    let mut days = ChargeableDays::default();
    let mut current = start;
    while current < end {
        current = current
            .checked_add_days(Days::new(1))
            .ok_or(CoreError::InvalidDateRange { start, end })?;

        if holidays.contains(&current) {
            days.holidays += 1;
        } else if matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.weekends += 1;
        } else {
            days.weekdays += 1;
        }
    }

    debug!(
        %start,
        %end,
        weekdays = days.weekdays,
        weekends = days.weekends,
        holidays = days.holidays,
        "Classified rental days"
    );
    Ok(days)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_observed_friday_holiday_and_weekend() {
        let days = classify(date(2020, 7, 2), date(2020, 7, 5)).unwrap();
        assert_eq!(
            days,
            ChargeableDays {
                weekdays: 0,
                weekends: 2,
                holidays: 1
            }
        );
    }

    #[test]
    fn test_independence_day_week_2015() {
        // 7/3 Fri (observed), 7/4 Sat, 7/5 Sun, 7/6 Mon, 7/7 Tue
        let days = classify(date(2015, 7, 2), date(2015, 7, 7)).unwrap();
        assert_eq!((days.weekdays, days.weekends, days.holidays), (2, 2, 1));
    }

    #[test]
    fn test_labor_day_week() {
        // 9/4 Fri, 9/5 Sat, 9/6 Sun, 9/7 Mon (Labor Day), 9/8 Tue, 9/9 Wed
        let days = classify(date(2015, 9, 3), date(2015, 9, 9)).unwrap();
        assert_eq!((days.weekdays, days.weekends, days.holidays), (3, 2, 1));
    }

    #[test]
    fn test_checkout_day_is_not_counted() {
        // Checkout on the holiday itself, return next day
        let days = classify(date(2024, 7, 4), date(2024, 7, 5)).unwrap();
        assert_eq!((days.weekdays, days.weekends, days.holidays), (1, 0, 0));
    }

    #[test]
    fn test_out_of_range_holidays_do_not_affect_counts() {
        // The resolver also returns 7/4 and 9/2 for this January range
        let days = classify(date(2024, 1, 1), date(2024, 1, 8)).unwrap();
        assert_eq!(days.holidays, 0);
        assert_eq!((days.weekdays, days.weekends), (5, 2));
    }

    #[test]
    fn test_range_spanning_new_year() {
        // 12/31 Tue through 1/2 Thu; no holidays in either year touch it
        let days = classify(date(2024, 12, 30), date(2025, 1, 2)).unwrap();
        assert_eq!((days.weekdays, days.weekends, days.holidays), (3, 0, 0));
    }

    #[test]
    fn test_rejects_empty_or_backwards_range() {
        assert!(matches!(
            classify(date(2024, 7, 4), date(2024, 7, 4)),
            Err(CoreError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            classify(date(2024, 7, 5), date(2024, 7, 1)),
            Err(CoreError::InvalidDateRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_buckets_partition_the_range(
            offset in 0i64..40_000,
            length in 1i64..800,
        ) {
            let start = date(1950, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(length);
            let days = classify(start, end).unwrap();
            prop_assert_eq!(days.total() as i64, (end - start).num_days());
        }
    }
}
