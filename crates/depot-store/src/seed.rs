//! # Standard Inventory
//!
//! The four tools every depot stocks.
//!
//! | Code | Type       | Brand  | Daily | Weekday | Weekend | Holiday |
//! |------|------------|--------|-------|---------|---------|---------|
//! | CHNS | Chainsaw   | Stihl  | $1.49 | yes     | no      | yes     |
//! | LADW | Ladder     | Werner | $1.99 | yes     | yes     | no      |
//! | JAKD | Jackhammer | DeWalt | $2.99 | yes     | no      | no      |
//! | JAKR | Jackhammer | Ridgid | $2.99 | yes     | no      | no      |

use depot_core::{Brand, Money, Price, Tool, ToolType};

const CHAINSAW_DAILY_CENTS: i64 = 149;
const LADDER_DAILY_CENTS: i64 = 199;
const JACKHAMMER_DAILY_CENTS: i64 = 299;

/// The standard inventory, in catalog order.
pub fn standard_tools() -> Vec<Tool> {
    let chainsaw = Price::new(Money::from_cents(CHAINSAW_DAILY_CENTS), true, false, true);
    let ladder = Price::new(Money::from_cents(LADDER_DAILY_CENTS), true, true, false);
    let jackhammer = Price::new(Money::from_cents(JACKHAMMER_DAILY_CENTS), true, false, false);

    vec![
        Tool::new("CHNS", ToolType::Chainsaw, Brand::Stihl, chainsaw),
        Tool::new("LADW", ToolType::Ladder, Brand::Werner, ladder),
        Tool::new("JAKD", ToolType::Jackhammer, Brand::DeWalt, jackhammer),
        Tool::new("JAKR", ToolType::Jackhammer, Brand::Ridgid, jackhammer),
    ]
}
