//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository insert / lookup                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoreError::Store (From impl below, applied by RentalDesk via ?)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Terminal stops: a broken store is not a bad request                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use depot_core::{CoreError, ValidationError};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this key is already stored.
    ///
    /// Both repositories are insert-only, so a second insert under the same
    /// key is rejected instead of overwriting.
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Tool rejected before it reached the catalog.
    #[error("Invalid tool: {0}")]
    Invalid(#[from] ValidationError),

    /// A writer panicked while holding the lock.
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),
}

impl StoreError {
    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
