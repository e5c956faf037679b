//! # stockroom-store: Persistence Layer for Stockroom
//!
//! This crate loads and saves the shop's item list. The whole collection is
//! read once at startup and rewritten after every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Menu choice (e.g. "4. Record sale")                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory::record_sale (stockroom-core, in memory)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  ItemStore    │    │  FileStore    │    │ MemoryStore  │  │   │
//! │  │   │  (traits.rs)  │◄───│  (file.rs)    │    │ (memory.rs)  │  │   │
//! │  │   │  load / save  │    │  JSON + tmp   │    │  for tests   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/stockroom/inventory.json                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`traits`] - The `ItemStore` interface
//! - [`config`] - File store configuration
//! - [`file`] - JSON file implementation
//! - [`memory`] - In-memory implementation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::{FileStore, ItemStore, StoreConfig};
//!
//! let store = FileStore::new(StoreConfig::new("inventory.json"));
//! let items = store.load()?;
//! store.save(&items)?;
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::{FileStore, FORMAT_VERSION};
pub use memory::MemoryStore;
pub use traits::ItemStore;
