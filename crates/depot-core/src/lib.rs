//! # depot-core: Pure Rental Logic for the Tool Rental Depot
//!
//! This crate is the **heart** of the rental POS. It turns a checkout request
//! into an immutable rental agreement with no I/O of its own.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tool Rental Depot Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/terminal (POS menu)                     │   │
//! │  │      Tool List ──► Rent a Tool ──► Agreement ──► Order Lookup   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ depot-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌───────────────┐  ┌─────────┐  ┌──────────┐   │   │
//! │  │   │ holiday  │─►│chargeable_days│─►│ pricing │─►│ checkout │   │   │
//! │  │   │ July 4th │  │ weekday/      │  │ cents,  │  │ validate │   │   │
//! │  │   │ Labor Day│  │ weekend/hol.  │  │ half-up │  │ assemble │   │   │
//! │  │   └──────────┘  └───────────────┘  └─────────┘  └────┬─────┘   │   │
//! │  │                                                      │         │   │
//! │  │   NO I/O • store access only through `store` traits  │         │   │
//! │  └──────────────────────────────────────────────────────┼─────────┘   │
//! │                                                         │             │
//! │  ┌──────────────────────────────────────────────────────▼─────────┐   │
//! │  │               depot-store (catalog + ledger)                   │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cent money (no floating point!)
//! - [`types`] - Tools, price policies, checkout requests, orders
//! - [`holiday`] - Observed US holidays (Independence Day, Labor Day)
//! - [`chargeable_days`] - Weekday/weekend/holiday breakdown of a date range
//! - [`pricing`] - Charge days and the three rounded amounts
//! - [`agreement`] - The rental agreement and its canonical text rendering
//! - [`validation`] - Request rules and boundary parsing
//! - [`store`] - Tool catalog and order ledger contracts
//! - [`checkout`] - The checkout orchestrator ([`RentalDesk`])
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use depot_core::money::Money;
//!
//! let daily = Money::from_cents(199);
//! let pre_discount = daily.checked_times(5).unwrap();  // $9.95
//! let discount = pre_discount.percent_half_up(10);     // $0.995 → $1.00
//! assert_eq!(discount.cents(), 100);
//! assert_eq!(pre_discount.checked_sub(discount).unwrap().to_string(), "$8.95");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod agreement;
pub mod chargeable_days;
pub mod checkout;
pub mod error;
pub mod holiday;
pub mod money;
pub mod pricing;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use agreement::RentalAgreement;
pub use chargeable_days::ChargeableDays;
pub use checkout::RentalDesk;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{OrderLedger, ToolCatalog};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest rental the counter accepts, in days.
pub const MIN_RENTAL_DAYS: i64 = 1;

/// Lowest accepted discount percentage.
pub const MIN_DISCOUNT_PERCENT: i64 = 0;

/// Highest accepted discount percentage.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// Date format used on agreements and at the terminal prompt.
///
/// Display only. Parsing goes through [`validation::parse_date`], which maps
/// two-digit years into 2000-2099.
pub const AGREEMENT_DATE_FORMAT: &str = "%-m/%-d/%y";
