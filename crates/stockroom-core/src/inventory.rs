//! # Inventory
//!
//! The in-memory item list and every operation the menu offers.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every mutating operation follows the same steps:                       │
//! │                                                                         │
//! │  1. Validate input            → ValidationError, nothing touched        │
//! │  2. Find item by name         → linear, case-insensitive scan           │
//! │  3. Check business rule       → CoreError, nothing touched              │
//! │  4. Mutate the record in place                                          │
//! │                                                                         │
//! │  Persisting the whole list afterwards is the caller's job               │
//! │  (stockroom-store), which keeps this module free of I/O.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items keep insertion order; the report and low-stock listing follow it.

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, SALES_CONVERSION_RATE};
use crate::types::{generate_item_id, Item, NewItem, SaleReceipt, StockChange};
use crate::validation::{
    validate_delta, validate_item_name, validate_price, validate_quantity,
    validate_sale_quantity, validate_threshold,
};
use crate::MAX_ITEM_QUANTITY;

/// The shop's stock list.
///
/// ## Invariants
/// - Names are unique under case-insensitive comparison
/// - No item has a negative quantity
/// - Stock updates never push a quantity above `MAX_ITEM_QUANTITY`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Builds an inventory from loaded records, repairing broken invariants.
    ///
    /// ## Repairs
    /// - Negative quantities are clamped to zero
    /// - A later item whose name duplicates an earlier one is dropped
    ///
    /// Each repair is logged at WARN so a hand-edited file doesn't fail
    /// silently.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut inventory = Inventory {
            items: Vec::with_capacity(items.len()),
        };

        for mut item in items {
            if inventory.position(&item.name).is_some() {
                warn!(name = %item.name, "Dropping duplicate item from loaded data");
                continue;
            }
            if item.quantity < 0 {
                warn!(
                    name = %item.name,
                    quantity = item.quantity,
                    "Clamping negative quantity from loaded data"
                );
                item.quantity = 0;
            }
            inventory.items.push(item);
        }

        inventory
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the inventory, returning its items.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by name (trimmed, case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.position(name).map(|i| &self.items[i])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(name))
    }

    fn position_or_not_found(&self, name: &str) -> CoreResult<usize> {
        self.position(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.trim().to_string()))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a new item with zero cumulative sales.
    ///
    /// ## Errors
    /// - `Validation` for an empty name or out-of-range numbers
    /// - `DuplicateItem` when the name exists in any letter case
    pub fn add_item(&mut self, new_item: NewItem) -> CoreResult<&Item> {
        validate_item_name(&new_item.name)?;
        validate_quantity(new_item.quantity)?;
        validate_price(new_item.price)?;
        validate_threshold(new_item.threshold)?;

        let name = new_item.name.trim().to_string();

        if let Some(existing) = self.find(&name) {
            return Err(CoreError::DuplicateItem {
                requested: name,
                existing: existing.name.clone(),
            });
        }

        let now = Utc::now();
        self.items.push(Item {
            id: generate_item_id(),
            name,
            quantity: new_item.quantity,
            price: new_item.price,
            threshold: new_item.threshold,
            cumulative_sales: Money::zero(),
            created_at: now,
            updated_at: now,
        });

        let item = &self.items[self.items.len() - 1];
        debug!(name = %item.name, id = %item.id, "Item added");
        Ok(item)
    }

    /// Adjusts stock by a signed delta.
    ///
    /// ## Clamping
    /// ```text
    /// quantity 3, delta -5  →  quantity 0, clamped = true
    /// quantity 3, delta +5  →  quantity 8, clamped = false
    /// quantity 999_999, +5  →  quantity 1_000_000, capped = true
    /// ```
    /// The quantity stays within `0..=MAX_ITEM_QUANTITY` through this path.
    pub fn update_stock(&mut self, name: &str, delta: i64) -> CoreResult<StockChange> {
        validate_delta(delta)?;
        let index = self.position_or_not_found(name)?;
        let item = &mut self.items[index];

        let previous = item.quantity;
        let raw = previous.saturating_add(delta);
        let clamped = raw < 0;
        let capped = raw > MAX_ITEM_QUANTITY;
        item.quantity = raw.clamp(0, MAX_ITEM_QUANTITY);
        item.touch();

        if clamped {
            warn!(
                name = %item.name,
                previous,
                delta,
                "Stock change would go below zero, clamped to 0"
            );
        } else if capped {
            warn!(
                name = %item.name,
                previous,
                delta,
                max = MAX_ITEM_QUANTITY,
                "Stock change would exceed the maximum, capped"
            );
        } else {
            debug!(name = %item.name, previous, current = item.quantity, "Stock updated");
        }

        Ok(StockChange {
            previous,
            current: item.quantity,
            requested_delta: delta,
            clamped,
            capped,
        })
    }

    /// Removes an item and returns it.
    pub fn delete_item(&mut self, name: &str) -> CoreResult<Item> {
        let index = self.position_or_not_found(name)?;
        let item = self.items.remove(index);
        debug!(name = %item.name, id = %item.id, "Item deleted");
        Ok(item)
    }

    /// Records a sale of `quantity` units.
    ///
    /// ## Flow
    /// ```text
    /// quantity > 0?              no → Validation error
    /// quantity <= stock?         no → InsufficientStock (nothing changes)
    /// stock -= quantity
    /// amount    = price × quantity
    /// converted = SALES_CONVERSION_RATE.convert(amount)
    /// cumulative_sales += converted
    /// ```
    pub fn record_sale(&mut self, name: &str, quantity: i64) -> CoreResult<SaleReceipt> {
        validate_sale_quantity(quantity)?;
        let index = self.position_or_not_found(name)?;
        let item = &mut self.items[index];

        if quantity > item.quantity {
            return Err(CoreError::InsufficientStock {
                name: item.name.clone(),
                available: item.quantity,
                requested: quantity,
            });
        }

        let amount = item.price.multiply_quantity(quantity);
        let converted = SALES_CONVERSION_RATE.convert(amount);

        item.quantity -= quantity;
        item.cumulative_sales += converted;
        item.touch();

        debug!(
            name = %item.name,
            quantity,
            amount = %amount,
            converted = %converted,
            remaining = item.quantity,
            "Sale recorded"
        );

        Ok(SaleReceipt {
            name: item.name.clone(),
            quantity,
            amount,
            converted,
            remaining: item.quantity,
            cumulative_sales: item.cumulative_sales,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Items whose quantity is below their threshold.
    pub fn low_stock(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_low_stock()).collect()
    }

    /// Builds the stock report.
    pub fn report(&self) -> InventoryReport {
        let lines: Vec<ReportLine> = self.items.iter().map(ReportLine::from).collect();

        InventoryReport {
            total_value: lines.iter().map(|line| line.value).sum(),
            total_sales: lines.iter().map(|line| line.cumulative_sales).sum(),
            low_stock_count: lines.iter().filter(|line| line.low_stock).count(),
            lines,
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// One row of the stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
    /// `quantity × price`.
    pub value: Money,
    pub threshold: i64,
    pub cumulative_sales: Money,
    pub low_stock: bool,
}

impl From<&Item> for ReportLine {
    fn from(item: &Item) -> Self {
        ReportLine {
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            value: item.stock_value(),
            threshold: item.threshold,
            cumulative_sales: item.cumulative_sales,
            low_stock: item.is_low_stock(),
        }
    }
}

/// The full stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    pub lines: Vec<ReportLine>,
    /// Sum of `quantity × price` over all items.
    pub total_value: Money,
    /// Sum of cumulative sales over all items.
    pub total_sales: Money,
    pub low_stock_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================
