//! # Stockroom Configuration
//!
//! Where the inventory lives, how money is printed and how loudly to log.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --data-file ./shop.json   --verbose                                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOCKROOM_DATA_FILE=/srv/shop/inventory.json                       │
//! │     STOCKROOM_CURRENCY_SYMBOL=€                                        │
//! │     STOCKROOM_LOG=debug                                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/stockroom/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.stockroom.stockroom/ (macOS)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     <data dir>/inventory.json, "$", "Rs "                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [store]
//! data_file = "/srv/shop/inventory.json"
//! pretty = true
//!
//! [display]
//! currency_symbol = "$"
//! sales_currency_symbol = "Rs "
//!
//! [log]
//! level = "warn,stockroom=info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use stockroom_core::Money;
use stockroom_store::StoreConfig;

/// Data file used when no platform data directory can be determined.
pub const FALLBACK_DATA_FILE: &str = "inventory.json";

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Inventory file. `None` means the platform data directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Write indented JSON.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            data_file: None,
            pretty: true,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Prefix for prices and stock values.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Prefix for converted sales totals.
    #[serde(default = "default_sales_currency_symbol")]
    pub sales_currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            sales_currency_symbol: default_sales_currency_symbol(),
        }
    }
}

impl DisplaySettings {
    /// Formats a price or stock value, e.g. `$12.50`.
    pub fn price(&self, amount: Money) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }

    /// Formats a converted sales amount, e.g. `Rs 1037.50`.
    pub fn sales(&self, amount: Money) -> String {
        format!("{}{}", self.sales_currency_symbol, amount)
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_sales_currency_symbol() -> String {
    "Rs ".to_string()
}

fn default_log_level() -> String {
    "warn,stockroom=info".to_string()
}

// =============================================================================
// Stockroom Config
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl StockroomConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit `config_path` must exist; the default
    ///    location may be absent)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.store.data_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("store.data_file must not be empty".into()));
            }
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.currency_symbol must not be empty".into(),
            ));
        }

        if self.display.sales_currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.sales_currency_symbol must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `STOCKROOM_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("STOCKROOM_DATA_FILE") {
            debug!(path = %path, "Overriding data file from environment");
            self.store.data_file = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(level) = lookup("STOCKROOM_LOG") {
            self.log.level = level;
        }
    }

    /// Resolves the inventory file path.
    ///
    /// `--data-file` wins, then the config value, then the platform data
    /// directory, then `./inventory.json`.
    pub fn data_file(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.store.data_file.clone())
            .or_else(Self::default_data_path)
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_FILE))
    }

    /// Builds the file store configuration.
    pub fn store_config(&self, cli_override: Option<&Path>) -> StoreConfig {
        StoreConfig::new(self.data_file(cli_override)).pretty(self.store.pretty)
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the default inventory file path.
    fn default_data_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(FALLBACK_DATA_FILE))
    }
}
