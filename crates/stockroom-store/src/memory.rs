//! In-memory implementation of [`ItemStore`].
//!
//! Holds the last saved list behind a lock. Used by the CLI session tests and
//! anywhere a throwaway inventory is wanted.

use std::sync::{PoisonError, RwLock};

use stockroom_core::Item;

use crate::error::StoreResult;
use crate::traits::ItemStore;

/// Item store that never touches the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        MemoryStore {
            items: RwLock::new(items),
        }
    }

    /// Snapshot of what was last saved.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Item>> {
        Ok(self.snapshot())
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        let mut stored = self.items.write().unwrap_or_else(PoisonError::into_inner);
        *stored = items.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
