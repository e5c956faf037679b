//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │      Item        │   │   StockChange    │   │   SaleReceipt    │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  id (UUID)       │   │  previous        │   │  quantity        │    │
//! │  │  name (business) │   │  current         │   │  amount          │    │
//! │  │  quantity        │   │  clamped         │   │  converted       │    │
//! │  │  price           │   │  capped          │   │  remaining       │    │
//! │  │  threshold       │   └──────────────────┘   └──────────────────┘    │
//! │  │  cumulative_sales│                                                  │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every item has:
//! - `id`: UUID v4 - immutable technical key
//! - `name`: business key, unique under case-insensitive comparison

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (UUID v4).
    #[serde(default = "generate_item_id")]
    pub id: String,

    /// Display name; the business key.
    pub name: String,

    /// Units on hand. Never negative.
    pub quantity: i64,

    /// Unit price.
    #[serde(rename = "price_cents")]
    pub price: Money,

    /// Quantity below which the item is flagged low-stock.
    pub threshold: i64,

    /// Running total of sales, after currency conversion.
    #[serde(rename = "cumulative_sales_cents", default)]
    pub cumulative_sales: Money,

    /// When the item was added.
    #[serde(default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the item was last changed.
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Returns true if `name` refers to this item (trimmed, case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }

    /// Stock value at the current price (`quantity × price`).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Checks if the item is below its low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.threshold
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Normalized form of a name used for every lookup and uniqueness check.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Generates a new item ID.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// New Item
// =============================================================================

/// Fields supplied by the user when adding an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
    pub threshold: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64, price: Money, threshold: i64) -> Self {
        NewItem {
            name: name.into(),
            quantity,
            price,
            threshold,
        }
    }
}

// =============================================================================
// Operation Results
// =============================================================================

/// Outcome of an update-stock operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    /// Quantity before the update.
    pub previous: i64,
    /// Quantity after the update.
    pub current: i64,
    /// The delta requested by the user.
    pub requested_delta: i64,
    /// True when the result would have gone below zero and was clamped.
    pub clamped: bool,
    /// True when the result would have exceeded `MAX_ITEM_QUANTITY` and was capped.
    pub capped: bool,
}

/// Outcome of a recorded sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleReceipt {
    /// Stored spelling of the item name.
    pub name: String,
    /// Units sold.
    pub quantity: i64,
    /// `price × quantity`, in the price currency.
    pub amount: Money,
    /// `amount` after applying the sales conversion rate.
    pub converted: Money,
    /// Stock left after the sale.
    pub remaining: i64,
    /// The item's cumulative sales after this sale.
    pub cumulative_sales: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
