//! # Terminal Error Type
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  Clerk types "abc" for day count                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationError ──► TerminalError::Input ──┐                          │
//! │                                             │  request error:          │
//! │  CoreError (discount, tool, ...) ───────────┤  print, show menu again  │
//! │                                             │                          │
//! │  Config / I/O / store failure ──────────────┴─► fatal: exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use depot_core::{CoreError, ValidationError};
use depot_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    /// Config file missing pieces or failing validation.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Typed input that could not be parsed.
    #[error(transparent)]
    Input(#[from] ValidationError),

    /// Checkout or lookup rejected by the rental desk.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

impl TerminalError {
    /// True for errors caused by one bad request, which the menu reports
    /// and moves past.
    pub fn is_request_error(&self) -> bool {
        match self {
            TerminalError::Input(_) => true,
            TerminalError::Core(err) => !matches!(err, CoreError::Store(_)),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for TerminalError {
    fn from(err: toml::de::Error) -> Self {
        TerminalError::ConfigLoadFailed(err.to_string())
    }
}

pub type TerminalResult<T> = Result<T, TerminalError>;
