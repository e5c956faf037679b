//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains all inventory logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (stockroom binary)                  │   │
//! │  │      Menu ──► Prompts ──► Confirmation / Error message          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ inventory │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ add/sell  │  │  parsing  │  │   │
//! │  │   │  NewItem  │  │ Conversion│  │  report   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stockroom-store                              │   │
//! │  │             whole-file JSON load / save                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, NewItem, StockChange, SaleReceipt)
//! - [`money`] - Money type with integer arithmetic and the sales conversion rate
//! - [`inventory`] - The in-memory item list and every operation on it
//! - [`error`] - Domain error types
//! - [`validation`] - Prompt parsing and business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Money, NewItem};
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .add_item(NewItem::new("Rice 5kg", 10, Money::from_cents(1250), 3))
//!     .unwrap();
//!
//! let receipt = inventory.record_sale("rice 5KG", 4).unwrap();
//! assert_eq!(receipt.amount.cents(), 5000);
//! assert_eq!(receipt.remaining, 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, InventoryReport, ReportLine};
pub use money::{ConversionRate, Money, SALES_CONVERSION_RATE};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum units of a single item, and the largest stock delta or sale
/// quantity accepted from a prompt.
///
/// ## Business Reason
/// Catches typos (an extra zero or two) long before they distort the report.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;

/// Maximum unit price in cents (1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
