//! # Store Contracts
//!
//! The two collaborators the checkout orchestrator talks to. depot-core only
//! defines the contracts; `depot-store` provides the in-memory
//! implementations.
//!
//! ```text
//! ┌──────────────────────┐            ┌──────────────────────┐
//! │     ToolCatalog      │            │     OrderLedger      │
//! │  find_by_code(code)  │            │  create(order)       │
//! │  find_all()          │            │  find_by_id(id)      │
//! └──────────────────────┘            └──────────────────────┘
//!        insert-only, no update or delete on either side
//! ```

use crate::types::{Order, OrderId, Tool};

/// Read access to the tool inventory.
pub trait ToolCatalog {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Looks a tool up by code.
    ///
    /// Unknown codes are `Ok(None)`, never an error.
    fn find_by_code(&self, code: &str) -> Result<Option<Tool>, Self::Error>;

    /// Every tool in the catalog, in no particular order.
    fn find_all(&self) -> Result<Vec<Tool>, Self::Error>;
}

/// Insert and lookup of placed orders.
pub trait OrderLedger {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stores a new order. It must be visible to `find_by_id` as soon as
    /// this returns.
    fn create(&self, order: Order) -> Result<(), Self::Error>;

    /// Looks an order up by id.
    fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, Self::Error>;
}
