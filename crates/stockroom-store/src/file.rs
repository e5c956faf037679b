//! # File Store
//!
//! JSON file implementation of [`ItemStore`].
//!
//! ## File Format
//! ```json
//! {
//!   "version": 1,
//!   "items": [
//!     {
//!       "id": "550e8400-e29b-41d4-a716-446655440000",
//!       "name": "Basmati Rice 5kg",
//!       "quantity": 10,
//!       "price_cents": 1250,
//!       "threshold": 3,
//!       "cumulative_sales_cents": 0,
//!       "created_at": "2026-10-19T09:00:00Z",
//!       "updated_at": "2026-10-19T09:00:00Z"
//!     }
//!   ]
//! }
//! ```
//!
//! ## Crash-Safe Rewrite
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       save(items)                                       │
//! │                                                                         │
//! │  1. serialize the full list                                            │
//! │  2. write inventory.json.tmp, fsync                                    │
//! │  3. rename inventory.json.tmp → inventory.json                         │
//! │                                                                         │
//! │  A crash before step 3 leaves the previous file intact.                │
//! │  rename() within one directory replaces the file in a single step.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use stockroom_core::Item;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::ItemStore;

/// Version written to, and required in, every inventory file.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    items: &'a [Item],
}

#[derive(Deserialize)]
struct Document {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

/// Stores the item list in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Creates a file store. Nothing is read or written until `load`/`save`.
    pub fn new(config: StoreConfig) -> Self {
        FileStore { config }
    }

    /// Path of the inventory file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn decode(&self, contents: &str) -> StoreResult<Vec<Item>> {
        let path = &self.config.path;

        let header: Header = serde_json::from_str(contents)
            .map_err(|e| StoreError::corrupt(path, e.to_string()))?;

        if header.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: header.version,
                expected: FORMAT_VERSION,
            });
        }

        let document: Document = serde_json::from_str(contents)
            .map_err(|e| StoreError::corrupt(path, e.to_string()))?;

        Ok(document.items)
    }

    fn encode(&self, items: &[Item]) -> StoreResult<String> {
        let document = DocumentRef {
            version: FORMAT_VERSION,
            items,
        };

        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };

        encoded.map_err(|e| StoreError::Serialize(e.to_string()))
    }
}

impl ItemStore for FileStore {
    fn load(&self) -> StoreResult<Vec<Item>> {
        let path = &self.config.path;

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !self.config.create_if_missing {
                    return Err(StoreError::NotFound(path.clone()));
                }
                info!(path = %path.display(), "Inventory file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        if contents.trim().is_empty() {
            debug!(path = %path.display(), "Inventory file is empty");
            return Ok(Vec::new());
        }

        let items = self.decode(&contents)?;
        info!(path = %path.display(), count = items.len(), "Inventory loaded");
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        let path = &self.config.path;
        let temp_path = self.config.temp_path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let contents = self.encode(items)?;

        let mut file = File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
        let written = file
            .write_all(contents.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.sync_all());
        drop(file);

        if let Err(e) = written {
            discard_temp(&temp_path);
            return Err(StoreError::io(&temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            discard_temp(&temp_path);
            return Err(StoreError::io(path, e));
        }

        debug!(path = %path.display(), count = items.len(), "Inventory saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.config.path.display().to_string()
    }
}

/// Removes a half-written temp file. The original error is what the caller
/// reports, so a failure here is only logged.
fn discard_temp(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        warn!(path = %temp_path.display(), error = %e, "Could not remove temp file");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_core::{Inventory, Money, NewItem};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(StoreConfig::new(dir.path().join("inventory.json")))
    }

    fn sample_items() -> Vec<Item> {
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Basmati Rice", 10, Money::from_cents(1250), 3))
            .unwrap();
        inventory
            .add_item(NewItem::new("Green Tea", 2, Money::from_cents(450), 5))
            .unwrap();
        inventory.record_sale("Basmati Rice", 2).unwrap();
        inventory.into_items()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_missing_file_is_an_error_when_not_creating() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(
            StoreConfig::new(dir.path().join("inventory.json")).create_if_missing(false),
        );
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let items = sample_items();

        store.save(&items).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, items);
    }

    #[test]
    fn test_round_trip_compact() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(
            StoreConfig::new(dir.path().join("inventory.json")).pretty(false),
        );
        let items = sample_items();

        store.save(&items).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(store.load().unwrap(), items);
    }

    #[test]
    fn test_save_replaces_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut items = sample_items();

        store.save(&items).unwrap();
        items.remove(0);
        store.save(&items).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Green Tea");
        assert!(!store.config().temp_path().exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(StoreConfig::new(
            dir.path().join("shop").join("data").join("inventory.json"),
        ));

        store.save(&sample_items()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        // A non-empty directory where the inventory file should be.
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep"), "x").unwrap();

        assert!(matches!(
            store.save(&sample_items()),
            Err(StoreError::Io { .. })
        ));
        assert!(!store.config().temp_path().exists());
        assert!(store.path().join("keep").exists());
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let item = Item {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Matches".to_string(),
            quantity: 40,
            price: Money::from_cents(10),
            threshold: 0,
            cumulative_sales: Money::from_cents(830),
            created_at: now,
            updated_at: now,
        };

        store.save(std::slice::from_ref(&item)).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["items"][0]["name"], "Matches");
        assert_eq!(value["items"][0]["price_cents"], 10);
        assert_eq!(value["items"][0]["cumulative_sales_cents"], 830);
        assert_eq!(value["items"][0]["created_at"], "2026-10-19T09:00:00Z");
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));

        fs::write(store.path(), r#"{"version": 1, "items": [{"name": 5}]}"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_unsupported_version() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"version": 2, "items": []}"#).unwrap();

        assert!(matches!(
            store.load(),
            Err(StoreError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        ));
    }

    #[test]
    fn test_describe_is_the_path() {
        let store = FileStore::new(StoreConfig::new("/var/shop/inventory.json"));
        assert_eq!(store.describe(), "/var/shop/inventory.json");
    }
}
