//! # Rental Agreement
//!
//! The immutable record produced by one successful checkout, and its
//! canonical text form.
//!
//! ## Text Layout
//! ```text
//! Tool Code: LADW
//! Tool Type: Ladder
//! Tool Brand: Werner
//! Rental Days: 3
//! Checkout Date: 7/2/20
//! Due Date: 7/5/20
//! Daily Rental Charge: $1.99
//! Charge Days: 2
//! Pre-discount Amount: $3.98
//! Discount Percent: 10%
//! Discount Amount: $0.40
//! Final Charge: $3.58
//! ```
//! Field order, labels and formats are fixed. Lines are joined with `\n`
//! with no trailing newline.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::pricing::RentalCharges;
use crate::types::{Brand, CheckoutRequest, Tool, ToolType};
use crate::AGREEMENT_DATE_FORMAT;

/// Everything the customer signs for one rental.
///
/// Fields are private so an agreement cannot be edited after it is built;
/// read them through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    tool_code: String,
    tool_type: ToolType,
    tool_brand: Brand,
    rental_days: i64,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    daily_charge: Money,
    charge_days: u32,
    pre_discount_amount: Money,
    discount_percent: i64,
    discount_amount: Money,
    final_charge: Money,
}

impl RentalAgreement {
    /// Assembles an agreement from the request, the tool and its charges.
    pub fn new(
        tool: &Tool,
        request: &CheckoutRequest,
        due_date: NaiveDate,
        charges: RentalCharges,
    ) -> Self {
        RentalAgreement {
            tool_code: tool.code.clone(),
            tool_type: tool.tool_type,
            tool_brand: tool.brand,
            rental_days: request.rental_days,
            checkout_date: request.checkout_date,
            due_date,
            daily_charge: tool.price.daily_charge,
            charge_days: charges.charge_days,
            pre_discount_amount: charges.pre_discount_amount,
            discount_percent: request.discount_percent,
            discount_amount: charges.discount_amount,
            final_charge: charges.final_charge,
        }
    }

    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    pub fn tool_brand(&self) -> Brand {
        self.tool_brand
    }

    pub fn rental_days(&self) -> i64 {
        self.rental_days
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Checkout date plus rental days.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn daily_charge(&self) -> Money {
        self.daily_charge
    }

    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    pub fn pre_discount_amount(&self) -> Money {
        self.pre_discount_amount
    }

    pub fn discount_percent(&self) -> i64 {
        self.discount_percent
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    pub fn final_charge(&self) -> Money {
        self.final_charge
    }

    /// Canonical text rendering (same as `Display`).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool Code: {}", self.tool_code)?;
        writeln!(f, "Tool Type: {}", self.tool_type)?;
        writeln!(f, "Tool Brand: {}", self.tool_brand)?;
        writeln!(f, "Rental Days: {}", self.rental_days)?;
        writeln!(
            f,
            "Checkout Date: {}",
            self.checkout_date.format(AGREEMENT_DATE_FORMAT)
        )?;
        writeln!(f, "Due Date: {}", self.due_date.format(AGREEMENT_DATE_FORMAT))?;
        writeln!(f, "Daily Rental Charge: {}", self.daily_charge)?;
        writeln!(f, "Charge Days: {}", self.charge_days)?;
        writeln!(f, "Pre-discount Amount: {}", self.pre_discount_amount)?;
        writeln!(f, "Discount Percent: {}%", self.discount_percent)?;
        writeln!(f, "Discount Amount: {}", self.discount_amount)?;
        write!(f, "Final Charge: {}", self.final_charge)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn ladder() -> Tool {
        Tool::new(
            "LADW",
            ToolType::Ladder,
            Brand::Werner,
            Price::new(Money::from_cents(199), true, true, false),
        )
    }

    fn agreement() -> RentalAgreement {
        let request = CheckoutRequest::new(
            "LADW",
            5,
            10,
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        );
        let charges = RentalCharges {
            charge_days: 5,
            pre_discount_amount: Money::from_cents(995),
            discount_amount: Money::from_cents(100),
            final_charge: Money::from_cents(895),
        };
        RentalAgreement::new(
            &ladder(),
            &request,
            NaiveDate::from_ymd_opt(2024, 10, 6).unwrap(),
            charges,
        )
    }

    #[test]
    fn test_render_matches_counter_layout() {
        let expected = "Tool Code: LADW\n\
                        Tool Type: Ladder\n\
                        Tool Brand: Werner\n\
                        Rental Days: 5\n\
                        Checkout Date: 10/1/24\n\
                        Due Date: 10/6/24\n\
                        Daily Rental Charge: $1.99\n\
                        Charge Days: 5\n\
                        Pre-discount Amount: $9.95\n\
                        Discount Percent: 10%\n\
                        Discount Amount: $1.00\n\
                        Final Charge: $8.95";
        assert_eq!(agreement().render(), expected);
    }

    #[test]
    fn test_dates_are_not_zero_padded() {
        let text = agreement().render();
        assert!(text.contains("Checkout Date: 10/1/24\n"));
        assert!(!text.contains("10/01/24"));
    }

    #[test]
    fn test_large_amounts_are_grouped() {
        let request = CheckoutRequest::new(
            "LADW",
            1000,
            0,
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
        );
        let charges = RentalCharges {
            charge_days: 1000,
            pre_discount_amount: Money::from_cents(199_000),
            discount_amount: Money::zero(),
            final_charge: Money::from_cents(199_000),
        };
        let text = RentalAgreement::new(
            &ladder(),
            &request,
            NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
            charges,
        )
        .render();
        assert!(text.contains("Pre-discount Amount: $1,990.00"));
        assert!(text.ends_with("Final Charge: $1,990.00"));
    }

    #[test]
    fn test_accessors() {
        let agreement = agreement();
        assert_eq!(agreement.tool_code(), "LADW");
        assert_eq!(agreement.tool_type(), ToolType::Ladder);
        assert_eq!(agreement.tool_brand(), Brand::Werner);
        assert_eq!(agreement.charge_days(), 5);
        assert_eq!(agreement.discount_percent(), 10);
        assert_eq!(agreement.final_charge().cents(), 895);
    }
}
