//! # Repository Module
//!
//! In-memory repositories for the rental counter.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RentalDesk                                                             │
//! │       │                                                                 │
//! │       │  catalog.find_by_code("LADW")      ledger.create(order)         │
//! │       ▼                                    ▼                            │
//! │  ToolRepository                       OrderRepository                   │
//! │  ├── insert(tool)                     ├── insert(order)                 │
//! │  ├── insert_all(tools)                ├── get_by_id(id)                 │
//! │  ├── get_by_code(code)                ├── list()                        │
//! │  ├── list()                           └── count()                       │
//! │  └── count()                                                            │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  Arc<RwLock<HashMap<String, Tool>>>   Arc<RwLock<OrderBook>>            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are cheap to clone; clones share the same data.
//!
//! - [`ToolRepository`](tool::ToolRepository) - Tool catalog
//! - [`OrderRepository`](order::OrderRepository) - Order ledger

pub mod order;
pub mod tool;
