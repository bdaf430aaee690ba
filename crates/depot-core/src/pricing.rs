//! # Pricing Calculator
//!
//! Applies a tool's price policy to a chargeable-day breakdown.
//!
//! ## Calculation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. charge days   = Σ bucket counts whose Price flag is on             │
//! │  2. pre-discount  = daily charge × charge days        (round half-up)   │
//! │  3. discount      = pre-discount × discount% / 100    (round half-up)   │
//! │  4. final charge  = pre-discount − discount           (round half-up)   │
//! │                                                                         │
//! │  Each step rounds on its own. Daily charges are whole cents, so a       │
//! │  daily rate finer than a cent (e.g. $1.495) cannot be represented and   │
//! │  steps 2 and 4 never have a fraction to round. Step 3 is the only one   │
//! │  where a half cent can appear.                                          │
//! │                                                                         │
//! │  Steps 2 and 4 are overflow-checked → CoreError::ChargeOverflow         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chargeable_days::ChargeableDays;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Price;

/// The computed charge for one rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCharges {
    pub charge_days: u32,
    pub pre_discount_amount: Money,
    pub discount_amount: Money,
    pub final_charge: Money,
}

/// Number of days the price policy actually charges for.
pub fn charge_days(days: &ChargeableDays, price: &Price) -> u32 {
    let mut charged = 0;
    if price.weekday_charge {
        charged += days.weekdays;
    }
    if price.weekend_charge {
        charged += days.weekends;
    }
    if price.holiday_charge {
        charged += days.holidays;
    }
    charged
}

/// Prices a rental.
///
/// `discount_percent` is expected to be validated (0..=100) by the caller.
///
/// The daily charge is whole cents, so a rate finer than a cent cannot be
/// expressed and the pre-discount amount is exact with no rounding to do.
///
/// ## Errors
/// [`CoreError::ChargeOverflow`] when daily charge × charge days leaves the
/// `i64` cent range.
///
/// ## Example
/// ```rust
/// use depot_core::chargeable_days::ChargeableDays;
/// use depot_core::money::Money;
/// use depot_core::pricing::price_rental;
/// use depot_core::types::Price;
///
/// let chainsaw = Price::new(Money::from_cents(149), true, false, true);
/// let days = ChargeableDays { weekdays: 2, weekends: 2, holidays: 1 };
///
/// let charges = price_rental(&days, &chainsaw, 25).unwrap();
/// assert_eq!(charges.charge_days, 3);
/// assert_eq!(charges.pre_discount_amount.to_string(), "$4.47");
/// assert_eq!(charges.discount_amount.to_string(), "$1.12");
/// assert_eq!(charges.final_charge.to_string(), "$3.35");
/// ```
pub fn price_rental(
    days: &ChargeableDays,
    price: &Price,
    discount_percent: i64,
) -> CoreResult<RentalCharges> {
    let charge_days = charge_days(days, price);
    let overflow = || CoreError::ChargeOverflow {
        daily_charge_cents: price.daily_charge.cents(),
        charge_days,
    };

    let pre_discount_amount = price
        .daily_charge
        .checked_times(i64::from(charge_days))
        .ok_or_else(overflow)?;
    let discount_amount = pre_discount_amount.percent_half_up(discount_percent);
    let final_charge = pre_discount_amount
        .checked_sub(discount_amount)
        .ok_or_else(overflow)?;

    debug!(
        charge_days,
        pre_discount = %pre_discount_amount,
        discount_percent,
        discount = %discount_amount,
        final_charge = %final_charge,
        "Priced rental"
    );

    Ok(RentalCharges {
        charge_days,
        pre_discount_amount,
        discount_amount,
        final_charge,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
