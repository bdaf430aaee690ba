//! # depot-store: Storage Layer for the Tool Rental Depot
//!
//! In-memory implementations of the [`ToolCatalog`] and [`OrderLedger`]
//! contracts from depot-core, plus the standard inventory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tool Rental Depot Data Flow                        │
//! │                                                                         │
//! │  RentalDesk::checkout (depot-core)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   depot-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │    Store      │    │  Repositories │    │    Seed      │   │   │
//! │  │   │  (store.rs)   │    │ (tool.rs,     │    │  (seed.rs)   │   │   │
//! │  │   │               │    │  order.rs)    │    │              │   │   │
//! │  │   │ one handle    │◄───│ ToolRepo      │    │ CHNS LADW    │   │   │
//! │  │   │ for the desk  │    │ OrderRepo     │    │ JAKD JAKR    │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<RwLock<HashMap<..>>> (lives as long as the process)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The [`Store`] handle and desk construction
//! - [`repository`] - Tool and order repositories
//! - [`seed`] - The standard inventory
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use depot_store::Store;
//!
//! let store = Store::seeded().unwrap();
//! let desk = store.rental_desk();
//! assert_eq!(desk.tools().unwrap().len(), 4);
//! ```
//!
//! [`ToolCatalog`]: depot_core::ToolCatalog
//! [`OrderLedger`]: depot_core::OrderLedger

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreDesk};

// Repository re-exports for convenience
pub use repository::order::OrderRepository;
pub use repository::tool::ToolRepository;
