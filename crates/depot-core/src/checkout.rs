//! # Checkout Orchestrator
//!
//! Turns checkout requests into placed orders.
//!
//! ## Checkout Flow (per request)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckoutRequest                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate ──────────► InvalidRentalDay / InvalidDiscount             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. catalog lookup ────► ToolNotFound                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. due date = checkout date + rental days                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. classify days (checkout date, due date]                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. price with the tool's policy and the discount ──► ChargeOverflow    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. assemble RentalAgreement                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  7. Order { fresh UUID, agreement } ──► ledger.create ──► OrderId       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A batch is processed strictly in input order. A failed request produces
//! its own error and leaves earlier orders in place; nothing is retried.

use chrono::Days;
use tracing::{debug, info, warn};

use crate::agreement::RentalAgreement;
use crate::chargeable_days::classify;
use crate::error::{CoreError, CoreResult};
use crate::pricing::price_rental;
use crate::store::{OrderLedger, ToolCatalog};
use crate::types::{CheckoutRequest, Order, OrderId, Tool};
use crate::validation::validate_request;

/// The rental counter: a tool catalog, an order ledger and the checkout
/// pipeline between them.
#[derive(Debug, Clone)]
pub struct RentalDesk<C, L> {
    catalog: C,
    ledger: L,
}

/// Store errors become [`CoreError`] through `From`, so each store crate
/// decides how its failures surface.
impl<C, L> RentalDesk<C, L>
where
    C: ToolCatalog,
    L: OrderLedger,
    CoreError: From<C::Error> + From<L::Error>,
{
    pub fn new(catalog: C, ledger: L) -> Self {
        RentalDesk { catalog, ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Checks out a batch, one result per request, in input order.
    pub fn checkout(&self, requests: &[CheckoutRequest]) -> Vec<CoreResult<OrderId>> {
        debug!(count = requests.len(), "Starting checkout batch");
        requests
            .iter()
            .map(|request| {
                let result = self.checkout_one(request);
                if let Err(err) = &result {
                    warn!(tool_code = %request.tool_code, error = %err, "Checkout rejected");
                }
                result
            })
            .collect()
    }

    /// Checks out a single request and records the order.
    pub fn checkout_one(&self, request: &CheckoutRequest) -> CoreResult<OrderId> {
        let agreement = self.quote(request)?;
        let order = Order::new(agreement);
        let id = order.id;

        self.ledger.create(order)?;

        info!(order_id = %id, tool_code = %request.tool_code, "Order placed");
        Ok(id)
    }

    /// Runs steps 1-6 of the checkout without placing an order.
    pub fn quote(&self, request: &CheckoutRequest) -> CoreResult<RentalAgreement> {
        debug!(
            tool_code = %request.tool_code,
            rental_days = request.rental_days,
            discount_percent = request.discount_percent,
            checkout_date = %request.checkout_date,
            "Processing checkout request"
        );

        validate_request(request)?;
        let tool = self.find_tool(&request.tool_code)?;

        // validate_request guarantees rental_days >= 1
        let due_date = request
            .checkout_date
            .checked_add_days(Days::new(request.rental_days.unsigned_abs()))
            .ok_or(CoreError::InvalidRentalDay {
                requested: request.rental_days,
            })?;

        let days = classify(request.checkout_date, due_date)?;
        let charges = price_rental(&days, &tool.price, request.discount_percent)?;

        Ok(RentalAgreement::new(&tool, request, due_date, charges))
    }

    /// Looks up a placed order.
    pub fn order(&self, id: &OrderId) -> CoreResult<Option<Order>> {
        Ok(self.ledger.find_by_id(id)?)
    }

    /// The catalog sorted by tool code, for display.
    pub fn tools(&self) -> CoreResult<Vec<Tool>> {
        let mut tools = self.catalog.find_all()?;
        tools.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(tools)
    }

    fn find_tool(&self, code: &str) -> CoreResult<Tool> {
        self.catalog
            .find_by_code(code)?
            .ok_or_else(|| CoreError::ToolNotFound(code.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
