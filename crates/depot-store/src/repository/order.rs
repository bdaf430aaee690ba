//! # Order Repository
//!
//! Placed orders, keyed by their UUID. An order is visible to lookups as
//! soon as `insert` returns.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use depot_core::{Order, OrderId, OrderLedger};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Orders plus the sequence they were placed in.
#[derive(Debug, Default)]
struct OrderBook {
    by_id: HashMap<OrderId, Order>,
    placed: Vec<OrderId>,
}

/// Repository for the order ledger.
#[derive(Debug, Clone, Default)]
pub struct OrderRepository {
    book: Arc<RwLock<OrderBook>>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an order. A second order with the same id is rejected.
    pub fn insert(&self, order: Order) -> StoreResult<()> {
        let mut book = self.write()?;
        if book.by_id.contains_key(&order.id) {
            return Err(StoreError::duplicate("order id", order.id.to_string()));
        }

        debug!(
            order_id = %order.id,
            tool_code = %order.agreement.tool_code(),
            final_charge = %order.agreement.final_charge(),
            "Order recorded"
        );
        book.placed.push(order.id);
        book.by_id.insert(order.id, order);
        Ok(())
    }

    pub fn get_by_id(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        Ok(self.read()?.by_id.get(id).cloned())
    }

    /// All orders, oldest first.
    pub fn list(&self) -> StoreResult<Vec<Order>> {
        let book = self.read()?;
        Ok(book
            .placed
            .iter()
            .filter_map(|id| book.by_id.get(id).cloned())
            .collect())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.placed.len())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, OrderBook>> {
        self.book
            .read()
            .map_err(|_| StoreError::Poisoned("order ledger"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, OrderBook>> {
        self.book
            .write()
            .map_err(|_| StoreError::Poisoned("order ledger"))
    }
}

impl OrderLedger for OrderRepository {
    type Error = StoreError;

    fn create(&self, order: Order) -> StoreResult<()> {
        self.insert(order)
    }

    fn find_by_id(&self, id: &OrderId) -> StoreResult<Option<Order>> {
        self.get_by_id(id)
    }
}

// =============================================================================
// Tests
// =============================================================================
