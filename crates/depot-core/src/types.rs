//! # Domain Types
//!
//! Core domain types used throughout the rental desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Tool       │   │     Price       │   │ CheckoutRequest │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (CHNS)    │──►│  daily_charge   │   │  tool_code      │       │
//! │  │  tool_type      │   │  weekday_charge │   │  rental_days    │       │
//! │  │  brand          │   │  weekend_charge │   │  discount_pct   │       │
//! │  │  price          │   │  holiday_charge │   │  checkout_date  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ToolType     │   │     Brand       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Chainsaw       │   │  Stihl  Werner  │   │  id (UUID v4)   │       │
//! │  │  Ladder         │   │  DeWalt Ridgid  │   │  agreement      │       │
//! │  │  Jackhammer     │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tools are created when the inventory is loaded and never change after
//! that. Orders own their agreement; nothing points back at a mutable owner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::agreement::RentalAgreement;
use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tool Type
// =============================================================================

/// Category of a rentable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolType {
    Chainsaw,
    Ladder,
    Jackhammer,
}

impl ToolType {
    /// Every tool type, in display order.
    pub const ALL: [ToolType; 3] = [ToolType::Chainsaw, ToolType::Ladder, ToolType::Jackhammer];

    /// Name printed on agreements and in the tool list.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ToolType::Chainsaw => "Chainsaw",
            ToolType::Ladder => "Ladder",
            ToolType::Jackhammer => "Jackhammer",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ToolType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "tool_type".to_string(),
                allowed: ToolType::ALL
                    .iter()
                    .map(|t| t.display_name().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Brand
// =============================================================================

/// Manufacturer of a rentable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    Stihl,
    Werner,
    #[serde(rename = "DEWALT")]
    DeWalt,
    Ridgid,
}

impl Brand {
    /// Every brand, in display order.
    pub const ALL: [Brand; 4] = [Brand::Stihl, Brand::Werner, Brand::DeWalt, Brand::Ridgid];

    /// Name printed on agreements.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Brand::Stihl => "Stihl",
            Brand::Werner => "Werner",
            Brand::DeWalt => "DeWalt",
            Brand::Ridgid => "Ridgid",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Brand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|b| b.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "brand".to_string(),
                allowed: Brand::ALL
                    .iter()
                    .map(|b| b.display_name().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Price
// =============================================================================

/// Pricing policy of a tool.
///
/// The three flags are independent; every combination is valid, including
/// all three off (a tool that always rents for free).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Charge per chargeable day.
    pub daily_charge: Money,

    /// Whether Monday-Friday non-holidays are charged.
    pub weekday_charge: bool,

    /// Whether Saturdays and Sundays are charged.
    pub weekend_charge: bool,

    /// Whether observed holidays are charged.
    pub holiday_charge: bool,
}

impl Price {
    pub const fn new(
        daily_charge: Money,
        weekday_charge: bool,
        weekend_charge: bool,
        holiday_charge: bool,
    ) -> Self {
        Price {
            daily_charge,
            weekday_charge,
            weekend_charge,
            holiday_charge,
        }
    }
}

// =============================================================================
// Tool
// =============================================================================

/// A rentable tool, identified by its code (e.g. `LADW`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub code: String,
    pub tool_type: ToolType,
    pub brand: Brand,
    pub price: Price,
}

impl Tool {
    pub fn new(code: impl Into<String>, tool_type: ToolType, brand: Brand, price: Price) -> Self {
        Tool {
            code: code.into(),
            tool_type,
            brand,
            price,
        }
    }
}

// =============================================================================
// Checkout Request
// =============================================================================

/// One line of a checkout, as typed in at the counter.
///
/// Not validated on construction: the orchestrator validates it so that a
/// bad request yields an error for that request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub tool_code: String,
    pub rental_days: i64,
    pub discount_percent: i64,
    pub checkout_date: NaiveDate,
}

impl CheckoutRequest {
    pub fn new(
        tool_code: impl Into<String>,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> Self {
        CheckoutRequest {
            tool_code: tool_code.into(),
            rental_days,
            discount_percent,
            checkout_date,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Unique order identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a fresh random id. Ids are never reused.
    pub fn generate() -> Self {
        OrderId(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        OrderId(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted checkout: one id, one agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub agreement: RentalAgreement,
}

impl Order {
    /// Wraps an agreement in an order with a freshly generated id.
    pub fn new(agreement: RentalAgreement) -> Self {
        Order {
            id: OrderId::generate(),
            agreement,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
