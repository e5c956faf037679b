//! # Item Commands
//!
//! Menu entries 1 (add), 2 (update stock) and 3 (delete).
//!
//! ## Prompt Order
//! ```text
//! Add item       name → quantity → price → threshold
//! Update stock   name → signed change (+5 / -3)
//! Delete item    name
//! ```
//! The name is checked first (duplicate for add, existence for the others)
//! so the user is not asked for numbers that would be thrown away.

use std::io::{BufRead, Write};
use tracing::debug;

use stockroom_core::validation::{parse_delta, parse_price, parse_quantity, parse_threshold};
use stockroom_core::{CoreError, Inventory, NewItem, MAX_ITEM_QUANTITY};

use super::{ask_existing_item, ask_item_name, warn_if_low, Outcome};
use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::AppResult;

/// 1. Add item.
pub fn add_item<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
    display: &DisplaySettings,
) -> AppResult<Outcome> {
    let name = ask_item_name(console)?;

    if let Some(existing) = inventory.find(&name) {
        return Err(CoreError::DuplicateItem {
            requested: name,
            existing: existing.name.clone(),
        }
        .into());
    }

    let quantity = parse_quantity(&console.ask("Quantity: ")?)?;
    let price = parse_price(&console.ask("Price: ")?)?;
    let threshold = parse_threshold(&console.ask("Low-stock threshold: ")?)?;

    let item = inventory.add_item(NewItem::new(name, quantity, price, threshold))?;

    writeln!(
        console,
        "Added '{}': {} in stock at {}, low-stock below {}.",
        item.name,
        item.quantity,
        display.price(item.price),
        item.threshold
    )?;

    Ok(Outcome::Changed)
}

/// 2. Update stock by a signed amount.
///
/// A change that would take the quantity below zero stops at zero, and one
/// that would pass `MAX_ITEM_QUANTITY` stops there. Both say so.
pub fn update_stock<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> AppResult<Outcome> {
    let item = ask_existing_item(inventory, console)?;
    let name = item.name.clone();
    writeln!(console, "'{}' has {} in stock.", item.name, item.quantity)?;

    let delta = parse_delta(&console.ask("Stock change (e.g. +5 or -3): ")?)?;
    let change = inventory.update_stock(&name, delta)?;

    if change.clamped {
        writeln!(
            console,
            "Stock for '{}' cannot go below zero; set to 0 (was {}, change {:+}).",
            name, change.previous, change.requested_delta
        )?;
    } else if change.capped {
        writeln!(
            console,
            "Stock for '{}' cannot exceed {}; set to {} (was {}, change {:+}).",
            name, MAX_ITEM_QUANTITY, change.current, change.previous, change.requested_delta
        )?;
    } else {
        writeln!(
            console,
            "Stock for '{}': {} -> {}.",
            name, change.previous, change.current
        )?;
    }

    if let Some(item) = inventory.find(&name) {
        warn_if_low(console, item)?;
    }

    debug!(name = %name, delta, current = change.current, "Stock update confirmed");
    Ok(Outcome::Changed)
}

/// 3. Delete item.
pub fn delete_item<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> AppResult<Outcome> {
    let name = ask_existing_item(inventory, console)?.name.clone();
    let removed = inventory.delete_item(&name)?;

    writeln!(console, "Deleted '{}'.", removed.name)?;
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;
    use stockroom_core::Money;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Basmati Rice", 10, Money::from_cents(1250), 3))
            .unwrap();
        inventory
    }

    #[test]
    fn test_add_item() {
        let mut inventory = Inventory::new();
        let mut console = console("  Green Tea \n12\n4.5\n5\n");

        let outcome = add_item(&mut inventory, &mut console, &DisplaySettings::default()).unwrap();

        assert_eq!(outcome, Outcome::Changed);
        let tea = inventory.find("green tea").unwrap();
        assert_eq!(tea.name, "Green Tea");
        assert_eq!(tea.quantity, 12);
        assert_eq!(tea.price.cents(), 450);
        assert_eq!(tea.threshold, 5);
        assert!(output(console).contains("Added 'Green Tea': 12 in stock at $4.50, low-stock below 5."));
    }

    #[test]
    fn test_add_duplicate_stops_before_numbers() {
        let mut inventory = stocked();
        let mut console = console("BASMATI rice\n");

        let err = add_item(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateItem);
        assert_eq!(err.message, "Item 'BASMATI rice' already exists as 'Basmati Rice'");
        assert_eq!(inventory.len(), 1);
        assert!(!output(console).contains("Quantity:"));
    }

    #[test]
    fn test_add_rejects_non_numeric_quantity() {
        let mut inventory = Inventory::new();
        let mut console = console("Green Tea\ntwelve\n");

        let err = add_item(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_price() {
        let mut inventory = Inventory::new();
        let mut console = console("Green Tea\n12\n4.555\n");

        let err = add_item(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_add_with_empty_name() {
        let mut inventory = Inventory::new();
        let mut console = console("   \n");

        let err = add_item(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_stock() {
        let mut inventory = stocked();
        let mut console = console("basmati rice\n+5\n");

        update_stock(&mut inventory, &mut console).unwrap();

        assert_eq!(inventory.find("Basmati Rice").unwrap().quantity, 15);
        let out = output(console);
        assert!(out.contains("'Basmati Rice' has 10 in stock."));
        assert!(out.contains("Stock for 'Basmati Rice': 10 -> 15."));
    }

    #[test]
    fn test_update_stock_clamps_and_warns() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\n-25\n");

        update_stock(&mut inventory, &mut console).unwrap();

        assert_eq!(inventory.find("Basmati Rice").unwrap().quantity, 0);
        let out = output(console);
        assert!(out.contains("cannot go below zero; set to 0 (was 10, change -25)."));
        assert!(out.contains("Warning: 'Basmati Rice' is low on stock (0 left, threshold 3)."));
    }

    #[test]
    fn test_update_stock_caps_at_maximum() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\n+1000000\nBasmati Rice\n+1000000\n");

        update_stock(&mut inventory, &mut console).unwrap();
        update_stock(&mut inventory, &mut console).unwrap();

        assert_eq!(inventory.find("Basmati Rice").unwrap().quantity, 1_000_000);
        let out = output(console);
        assert!(out.contains(
            "Stock for 'Basmati Rice' cannot exceed 1000000; set to 1000000 (was 10, change +1000000)."
        ));
        assert!(out.contains("(was 1000000, change +1000000)."));
    }

    #[test]
    fn test_update_unknown_item() {
        let mut inventory = stocked();
        let mut console = console("Saffron\n");

        let err = update_stock(&mut inventory, &mut console).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: Saffron");
    }

    #[test]
    fn test_update_rejects_non_numeric_delta() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\nlots\n");

        let err = update_stock(&mut inventory, &mut console).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(inventory.find("Basmati Rice").unwrap().quantity, 10);
    }

    #[test]
    fn test_delete_item() {
        let mut inventory = stocked();
        let mut console = console("BASMATI RICE\n");

        delete_item(&mut inventory, &mut console).unwrap();

        assert!(inventory.is_empty());
        assert!(output(console).contains("Deleted 'Basmati Rice'."));
    }

    #[test]
    fn test_delete_unknown_item() {
        let mut inventory = stocked();
        let mut console = console("Saffron\n");

        let err = delete_item(&mut inventory, &mut console).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(inventory.len(), 1);
    }
}
