//! # Menu Commands
//!
//! One function per menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared prompts, Outcome)
//! ├── item.rs     ◄─── 1 add, 2 update stock, 3 delete
//! ├── sale.rs     ◄─── 4 record sale
//! └── report.rs   ◄─── 5 low-stock check, 6 report
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Session reads "4"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sale::record_sale(                                                    │
//! │      inventory: &mut Inventory,     ◄── only what it needs             │
//! │      console:   &mut Console<R, W>,                                    │
//! │      display:   &DisplaySettings,                                      │
//! │  ) -> AppResult<Outcome>                                               │
//! │         │                                                               │
//! │         ├── Ok(Outcome::Changed)   → session saves the whole list      │
//! │         ├── Ok(Outcome::Unchanged) → nothing to save                   │
//! │         └── Err(AppError)          → session prints it, menu again     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never touch the store. Every prompt answer is parsed before the
//! inventory is mutated, so a rejected answer leaves everything as it was.

pub mod item;
pub mod report;
pub mod sale;

use std::io::{BufRead, Write};

use stockroom_core::validation::validate_item_name;
use stockroom_core::{CoreError, Inventory, Item};

use crate::console::Console;
use crate::error::AppResult;

/// What a command did to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The inventory was mutated and must be saved.
    Changed,
    /// Read-only command, or nothing to do.
    Unchanged,
}

/// Asks for an item name and validates it.
fn ask_item_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<String> {
    let name = console.ask("Item name: ")?;
    validate_item_name(&name)?;
    Ok(name.trim().to_string())
}

/// Asks for the name of an item that must already exist.
fn ask_existing_item<'a, R: BufRead, W: Write>(
    inventory: &'a Inventory,
    console: &mut Console<R, W>,
) -> AppResult<&'a Item> {
    let name = ask_item_name(console)?;
    inventory
        .find(&name)
        .ok_or_else(|| CoreError::ItemNotFound(name).into())
}

/// Prints a warning when `item` has dropped below its threshold.
fn warn_if_low<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    item: &Item,
) -> AppResult<()> {
    if item.is_low_stock() {
        writeln!(
            console,
            "Warning: '{}' is low on stock ({} left, threshold {}).",
            item.name, item.quantity, item.threshold
        )?;
    }
    Ok(())
}
