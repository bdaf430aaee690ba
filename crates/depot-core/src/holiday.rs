//! # Holiday Resolver
//!
//! Observed holidays that exempt a rental day from weekday/weekend pricing.
//!
//! ## Observed Holidays
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Independence Day (July 4th)                                            │
//! │    Sat Jul 4 → observed Fri Jul 3                                       │
//! │    Sun Jul 4 → observed Mon Jul 5                                       │
//! │    otherwise → observed Jul 4                                           │
//! │                                                                         │
//! │  Labor Day                                                              │
//! │    first Monday of September                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`holidays_between`] returns both holidays for every calendar year the
//! range touches, including ones that fall outside the range. Callers only
//! test membership, so the extras never change a count.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Checks the range contract shared by the resolver and the classifier.
pub(crate) fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> CoreResult<()> {
    if start >= end {
        return Err(CoreError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Returns the observed holidays of every year from `start.year()` through
/// `end.year()`.
///
/// ## Errors
/// [`CoreError::InvalidDateRange`] unless `start < end`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use depot_core::holiday::holidays_between;
///
/// let start = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 7, 10).unwrap();
/// let holidays = holidays_between(start, end).unwrap();
///
/// // July 4th 2020 was a Saturday
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()));
/// // Labor Day is outside the range but still present
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2020, 9, 7).unwrap()));
/// ```
pub fn holidays_between(start: NaiveDate, end: NaiveDate) -> CoreResult<BTreeSet<NaiveDate>> {
    ensure_ordered(start, end)?;

    let mut holidays = BTreeSet::new();
    for year in start.year()..=end.year() {
        let out_of_calendar = || CoreError::InvalidDateRange { start, end };
        holidays.insert(observed_independence_day(year).ok_or_else(out_of_calendar)?);
        holidays.insert(labor_day(year).ok_or_else(out_of_calendar)?);
    }

    debug!(%start, %end, ?holidays, "Resolved observed holidays");
    Ok(holidays)
}

/// Observed Independence Day for `year`.
///
/// `None` only for years chrono cannot represent.
pub fn observed_independence_day(year: i32) -> Option<NaiveDate> {
    let july_fourth = NaiveDate::from_ymd_opt(year, 7, 4)?;
    match july_fourth.weekday() {
        Weekday::Sat => july_fourth.checked_sub_days(Days::new(1)),
        Weekday::Sun => july_fourth.checked_add_days(Days::new(1)),
        _ => Some(july_fourth),
    }
}

/// Labor Day (first Monday of September) for `year`.
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
