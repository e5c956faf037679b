//! # Store Configuration
//!
//! Where the inventory file lives and how it is written.

use std::path::PathBuf;

/// File store configuration.
///
/// ## Example
/// ```rust
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/inventory.json")
///     .pretty(false)
///     .create_if_missing(true);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the inventory file.
    pub path: PathBuf,

    /// Write indented JSON.
    /// Default: true (the file is meant to be readable by the shop owner)
    pub pretty: bool,

    /// Treat a missing file as an empty inventory.
    /// Default: true
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            pretty: true,
            create_if_missing: true,
        }
    }

    /// Sets whether to write indented JSON.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets whether a missing file loads as empty.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Path of the scratch file written before the atomic rename.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "inventory.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
