//! # Store Handle
//!
//! One handle owning both repositories, and the desk built on top of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Terminal startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::seeded() / Store::new() + add_tools(..)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.rental_desk() ──► RentalDesk<ToolRepository, OrderRepository>    │
//! │                            (shares data with the store)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use depot_core::{RentalDesk, Tool};
use tracing::info;

use crate::error::StoreResult;
use crate::repository::order::OrderRepository;
use crate::repository::tool::ToolRepository;
use crate::seed::standard_tools;

/// The checkout desk backed by the in-memory repositories.
pub type StoreDesk = RentalDesk<ToolRepository, OrderRepository>;

/// In-memory storage for one depot.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tools: ToolRepository,
    orders: OrderRepository,
}

impl Store {
    /// Creates a store with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store stocked with the standard inventory.
    pub fn seeded() -> StoreResult<Self> {
        let store = Store::new();
        store.add_tools(standard_tools())?;
        info!(tools = store.tools.count()?, "Store seeded with standard inventory");
        Ok(store)
    }

    pub fn add_tools(&self, tools: impl IntoIterator<Item = Tool>) -> StoreResult<()> {
        self.tools.insert_all(tools)
    }

    /// Gets the tool repository.
    pub fn tools(&self) -> &ToolRepository {
        &self.tools
    }

    /// Builds a checkout desk sharing this store's data.
    pub fn rental_desk(&self) -> StoreDesk {
        RentalDesk::new(self.tools.clone(), self.orders.clone())
    }
}
