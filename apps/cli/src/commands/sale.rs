//! # Sale Command
//!
//! Menu entry 4.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Record Sale                                          │
//! │                                                                         │
//! │  Item name: basmati rice                                               │
//! │       │  (must exist)                                                   │
//! │       ▼                                                                 │
//! │  'Basmati Rice' has 10 in stock at $12.50.                             │
//! │  Quantity sold: 4                                                      │
//! │       │  (positive, at most the stock on hand)                         │
//! │       ▼                                                                 │
//! │  Inventory::record_sale                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Sold 4 x 'Basmati Rice' for $50.00 (Rs 4150.00 added to sales).      │
//! │  Remaining stock: 6.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::debug;

use stockroom_core::validation::parse_sale_quantity;
use stockroom_core::Inventory;

use super::{ask_existing_item, warn_if_low, Outcome};
use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::AppResult;

/// 4. Record sale.
pub fn record_sale<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
    display: &DisplaySettings,
) -> AppResult<Outcome> {
    let item = ask_existing_item(inventory, console)?;
    let name = item.name.clone();
    writeln!(
        console,
        "'{}' has {} in stock at {}.",
        item.name,
        item.quantity,
        display.price(item.price)
    )?;

    let quantity = parse_sale_quantity(&console.ask("Quantity sold: ")?)?;
    let receipt = inventory.record_sale(&name, quantity)?;

    writeln!(
        console,
        "Sold {} x '{}' for {} ({} added to sales).",
        receipt.quantity,
        receipt.name,
        display.price(receipt.amount),
        display.sales(receipt.converted)
    )?;
    writeln!(console, "Remaining stock: {}.", receipt.remaining)?;

    if let Some(item) = inventory.find(&name) {
        warn_if_low(console, item)?;
    }

    debug!(
        name = %receipt.name,
        quantity,
        cumulative_sales = %receipt.cumulative_sales,
        "Sale confirmed"
    );
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;
    use stockroom_core::{Money, NewItem};

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Basmati Rice", 10, Money::from_cents(1250), 3))
            .unwrap();
        inventory
    }

    #[test]
    fn test_record_sale() {
        let mut inventory = stocked();
        let mut console = console("basmati rice\n4\n");

        let outcome = record_sale(&mut inventory, &mut console, &DisplaySettings::default()).unwrap();

        assert_eq!(outcome, Outcome::Changed);
        let rice = inventory.find("Basmati Rice").unwrap();
        assert_eq!(rice.quantity, 6);
        assert_eq!(rice.cumulative_sales.cents(), 415_000);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("'Basmati Rice' has 10 in stock at $12.50."));
        assert!(out.contains("Sold 4 x 'Basmati Rice' for $50.00 (Rs 4150.00 added to sales)."));
        assert!(out.contains("Remaining stock: 6."));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn test_sale_into_low_stock_warns() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\n8\n");

        record_sale(&mut inventory, &mut console, &DisplaySettings::default()).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Warning: 'Basmati Rice' is low on stock (2 left, threshold 3)."));
    }

    #[test]
    fn test_oversell_is_rejected() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\n11\n");

        let err = record_sale(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        let rice = inventory.find("Basmati Rice").unwrap();
        assert_eq!(rice.quantity, 10);
        assert!(rice.cumulative_sales.is_zero());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut inventory = stocked();
        let mut console = console("Basmati Rice\n0\n");

        let err = record_sale(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(inventory.find("Basmati Rice").unwrap().quantity, 10);
    }

    #[test]
    fn test_sale_of_unknown_item() {
        let mut inventory = stocked();
        let mut console = console("Saffron\n");

        let err = record_sale(&mut inventory, &mut console, &DisplaySettings::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
