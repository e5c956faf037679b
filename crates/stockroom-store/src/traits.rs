//! ItemStore trait: the interface for item list persistence.
//!
//! The CLI is storage-agnostic. Implementations are the JSON file store
//! (primary) and an in-memory store (for tests).

use stockroom_core::Item;

use crate::error::StoreResult;

/// Whole-collection persistence.
///
/// # Design Notes
///
/// - **No partial writes**: `save` always receives the full list and replaces
///   whatever was stored before.
/// - **Order is kept**: `load` returns items in the order they were saved.
/// - **Missing is empty**: a store with nothing saved yet loads as `[]`
///   (unless configured otherwise).
pub trait ItemStore {
    /// Loads every stored item.
    fn load(&self) -> StoreResult<Vec<Item>>;

    /// Replaces the stored collection with `items`.
    fn save(&self, items: &[Item]) -> StoreResult<()>;

    /// Human-readable location, for log lines and the startup banner.
    fn describe(&self) -> String;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    fn load(&self) -> StoreResult<Vec<Item>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        (**self).save(items)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
