//! # Terminal Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DEPOT_STORE_NAME="Uptown Depot"                                    │
//! │     DEPOT_LOG_FILTER=debug                                             │
//! │     DEPOT_USE_DEFAULT_TOOLS=false                                      │
//! │                                                                         │
//! │  2. TOML Config File (--config, or the platform default)               │
//! │     ~/.config/depot/terminal.toml (Linux)                              │
//! │     ~/Library/Application Support/com.tool-rental.depot/terminal.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     standard inventory, "info,depot=debug"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Uptown Depot"
//!
//! [logging]
//! filter = "info,depot=debug"
//!
//! [inventory]
//! use_default_tools = true
//!
//! [[inventory.tools]]
//! code = "LADR"
//! tool_type = "ladder"
//! brand = "ridgid"
//! daily_charge = "$2.49"
//! weekday_charge = true
//! weekend_charge = true
//! holiday_charge = false
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use depot_core::validation::validate_tool;
use depot_core::{Brand, Money, Price, Tool, ToolType};
use depot_store::seed::standard_tools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{TerminalError, TerminalResult};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,depot=debug";

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Name shown in the menu banner.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Tool Rental Depot POS".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

/// One extra tool from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub code: String,
    /// Type tag or display name, any case.
    pub tool_type: String,
    /// Brand tag or display name, any case.
    pub brand: String,
    /// Dollar amount such as `"$2.49"` or `"2.49"`; at most two decimals.
    pub daily_charge: String,
    #[serde(default)]
    pub weekday_charge: bool,
    #[serde(default)]
    pub weekend_charge: bool,
    #[serde(default)]
    pub holiday_charge: bool,
}

impl ToolEntry {
    pub fn to_tool(&self) -> TerminalResult<Tool> {
        let tool_type: ToolType = self.tool_type.parse()?;
        let brand: Brand = self.brand.parse()?;
        let daily_charge: Money = self.daily_charge.parse()?;
        let price = Price::new(
            daily_charge,
            self.weekday_charge,
            self.weekend_charge,
            self.holiday_charge,
        );
        let tool = Tool::new(self.code.clone(), tool_type, brand, price);
        validate_tool(&tool)?;
        Ok(tool)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Stock the standard CHNS/LADW/JAKD/JAKR tools.
    #[serde(default = "default_true")]
    pub use_default_tools: bool,

    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

fn default_true() -> bool {
    true
}

impl Default for InventorySettings {
    fn default() -> Self {
        InventorySettings {
            use_default_tools: true,
            tools: Vec::new(),
        }
    }
}

// =============================================================================
// Main Terminal Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub inventory: InventorySettings,
}

impl TerminalConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (a missing file is not an error)
    /// 3. `DEPOT_*` environment variables
    pub fn load(config_path: Option<PathBuf>) -> TerminalResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a config file, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> TerminalResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading terminal config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TerminalError::ConfigLoadFailed(format!("{}: {e}", path.display())))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `DEPOT_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> TerminalResult<()> {
        if let Some(name) = var("DEPOT_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(filter) = var("DEPOT_LOG_FILTER") {
            self.logging.filter = filter;
        }

        if let Some(flag) = var("DEPOT_USE_DEFAULT_TOOLS") {
            self.inventory.use_default_tools = flag.trim().parse().map_err(|_| {
                TerminalError::Config(format!(
                    "DEPOT_USE_DEFAULT_TOOLS must be true or false, got: {flag}"
                ))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TerminalResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(TerminalError::Config("logging filter must not be empty".into()));
        }

        let tools = self.inventory()?;
        if tools.is_empty() {
            return Err(TerminalError::Config(
                "inventory is empty: enable use_default_tools or add [[inventory.tools]]".into(),
            ));
        }

        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.code.as_str()) {
                return Err(TerminalError::Config(format!(
                    "tool code {} is listed more than once",
                    tool.code
                )));
            }
        }

        Ok(())
    }

    /// The tools to stock: the standard set (if enabled) followed by the
    /// configured entries.
    pub fn inventory(&self) -> TerminalResult<Vec<Tool>> {
        let mut tools = if self.inventory.use_default_tools {
            standard_tools()
        } else {
            Vec::new()
        };

        for entry in &self.inventory.tools {
            let tool = entry.to_tool().map_err(|e| {
                TerminalError::Config(format!("tool entry {}: {e}", entry.code))
            })?;
            tools.push(tool);
        }

        Ok(tools)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tool-rental", "depot")
            .map(|dirs| dirs.config_dir().join("terminal.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.inventory().unwrap().len(), 4);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.store.name, "Tool Rental Depot POS");
        assert!(config.inventory.use_default_tools);
    }

    #[test]
    fn test_file_with_extra_tool() {
        let file = write_config(
            r#"
            [store]
            name = "Uptown Depot"

            [[inventory.tools]]
            code = "LADR"
            tool_type = "ladder"
            brand = "Ridgid"
            daily_charge = "$2.49"
            weekday_charge = true
            weekend_charge = true
            "#,
        );

        let config = TerminalConfig::from_file(file.path()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.store.name, "Uptown Depot");

        let tools = config.inventory().unwrap();
        assert_eq!(tools.len(), 5);
        let extra = &tools[4];
        assert_eq!(extra.code, "LADR");
        assert_eq!(extra.tool_type, ToolType::Ladder);
        assert_eq!(extra.brand, Brand::Ridgid);
        assert_eq!(extra.price.daily_charge.to_string(), "$2.49");
        assert!(!extra.price.holiday_charge);
    }

    #[test]
    fn test_daily_charge_text_forms() {
        let entry = |charge: &str| ToolEntry {
            code: "LADR".into(),
            tool_type: "Ladder".into(),
            brand: "werner".into(),
            daily_charge: charge.into(),
            weekday_charge: true,
            weekend_charge: true,
            holiday_charge: false,
        };

        assert_eq!(entry("$2.49").to_tool().unwrap().price.daily_charge.cents(), 249);
        assert_eq!(entry("1,000").to_tool().unwrap().price.daily_charge.cents(), 100_000);
        assert!(matches!(entry("two").to_tool(), Err(TerminalError::Input(_))));
        // parses, then fails the positive-charge rule
        assert!(matches!(entry("0.00").to_tool(), Err(TerminalError::Input(_))));
    }

    #[test]
    fn test_invalid_toml_is_a_load_error() {
        let file = write_config("[store\nname = 1");
        assert!(matches!(
            TerminalConfig::from_file(file.path()),
            Err(TerminalError::ConfigLoadFailed(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_inventory() {
        let mut config = TerminalConfig::default();
        config.inventory.tools.push(ToolEntry {
            code: "CHNS".into(),
            tool_type: "chainsaw".into(),
            brand: "stihl".into(),
            daily_charge: "1.49".into(),
            weekday_charge: true,
            weekend_charge: false,
            holiday_charge: true,
        });
        assert!(matches!(config.validate(), Err(TerminalError::Config(_))));

        config.inventory.tools[0].code = "CHN2".into();
        config.inventory.tools[0].brand = "acme".into();
        assert!(matches!(config.validate(), Err(TerminalError::Config(_))));

        config.inventory.tools[0].brand = "stihl".into();
        assert!(config.validate().is_ok());
        config.inventory.tools[0].daily_charge = "1.495".into();
        assert!(matches!(config.validate(), Err(TerminalError::Config(_))));

        let empty = TerminalConfig {
            inventory: InventorySettings {
                use_default_tools: false,
                tools: Vec::new(),
            },
            ..TerminalConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("DEPOT_STORE_NAME", "Night Counter"),
            ("DEPOT_LOG_FILTER", "warn"),
            ("DEPOT_USE_DEFAULT_TOOLS", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = TerminalConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.store.name, "Night Counter");
        assert_eq!(config.logging.filter, "warn");
        assert!(!config.inventory.use_default_tools);
    }

    #[test]
    fn test_bad_boolean_override() {
        let mut config = TerminalConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "DEPOT_USE_DEFAULT_TOOLS").then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(TerminalError::Config(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&TerminalConfig::default()).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[inventory]"));
    }
}
