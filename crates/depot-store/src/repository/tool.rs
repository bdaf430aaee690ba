//! # Tool Repository
//!
//! The rentable inventory, keyed by tool code.
//!
//! Tools are validated on the way in (code shape, positive daily charge) so
//! the checkout pipeline never sees a malformed tool. There is no update or
//! delete.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use depot_core::validation::validate_tool;
use depot_core::{Tool, ToolCatalog};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Repository for the tool catalog.
///
/// ## Usage
/// ```rust
/// use depot_store::ToolRepository;
/// use depot_store::seed::standard_tools;
///
/// let repo = ToolRepository::new();
/// repo.insert_all(standard_tools()).unwrap();
///
/// let ladder = repo.get_by_code("LADW").unwrap().unwrap();
/// assert_eq!(ladder.price.daily_charge.to_string(), "$1.99");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolRepository {
    tools: Arc<RwLock<HashMap<String, Tool>>>,
}

impl ToolRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool to the catalog.
    ///
    /// ## Errors
    /// - [`StoreError::Invalid`] when the tool fails validation
    /// - [`StoreError::Duplicate`] when the code is already stocked
    pub fn insert(&self, tool: Tool) -> StoreResult<()> {
        validate_tool(&tool)?;

        let mut tools = self.write()?;
        if tools.contains_key(&tool.code) {
            return Err(StoreError::duplicate("tool code", tool.code));
        }

        info!(
            code = %tool.code,
            tool_type = %tool.tool_type,
            brand = %tool.brand,
            daily_charge = %tool.price.daily_charge,
            "Tool added"
        );
        tools.insert(tool.code.clone(), tool);
        Ok(())
    }

    /// Adds several tools, stopping at the first rejected one.
    ///
    /// Tools before the rejected one stay in the catalog.
    pub fn insert_all(&self, tools: impl IntoIterator<Item = Tool>) -> StoreResult<()> {
        for tool in tools {
            self.insert(tool)?;
        }
        Ok(())
    }

    /// Gets a tool by its code. Codes are matched exactly.
    pub fn get_by_code(&self, code: &str) -> StoreResult<Option<Tool>> {
        let tool = self.read()?.get(code).cloned();
        debug!(code = %code, found = tool.is_some(), "Tool lookup");
        Ok(tool)
    }

    /// Lists every tool, sorted by code.
    pub fn list(&self) -> StoreResult<Vec<Tool>> {
        let mut tools: Vec<Tool> = self.read()?.values().cloned().collect();
        tools.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(tools)
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Tool>>> {
        self.tools
            .read()
            .map_err(|_| StoreError::Poisoned("tool catalog"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Tool>>> {
        self.tools
            .write()
            .map_err(|_| StoreError::Poisoned("tool catalog"))
    }
}

impl ToolCatalog for ToolRepository {
    type Error = StoreError;

    fn find_by_code(&self, code: &str) -> StoreResult<Option<Tool>> {
        self.get_by_code(code)
    }

    fn find_all(&self) -> StoreResult<Vec<Tool>> {
        self.list()
    }
}

// =============================================================================
// Tests
// =============================================================================
