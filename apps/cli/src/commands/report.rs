//! # Report Commands
//!
//! Menu entries 5 (low-stock check) and 6 (report). Both are read-only and
//! are also reachable as `stockroom low-stock` / `stockroom report`, so the
//! rendering is written against any `Write`.
//!
//! ## Report Layout
//! ```text
//! Name                        Qty        Price        Value          Sales
//! ------------------------------------------------------------------------
//! Basmati Rice                  6       $12.50       $75.00     Rs 4150.00
//! Green Tea                     2        $4.50        $9.00        Rs 0.00  LOW
//! ------------------------------------------------------------------------
//! Total stock value: $84.00
//! Total sales: Rs 4150.00
//! 2 items, 1 low on stock
//! ```

use std::io::{self, BufRead, Write};

use stockroom_core::Inventory;

use super::Outcome;
use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::AppResult;

const RULE_WIDTH: usize = 72;

/// 5. Low-stock check.
pub fn low_stock_check<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> AppResult<Outcome> {
    write_low_stock(console, inventory)?;
    Ok(Outcome::Unchanged)
}

/// 6. Report.
pub fn report<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
    display: &DisplaySettings,
) -> AppResult<Outcome> {
    write_report(console, inventory, display)?;
    Ok(Outcome::Unchanged)
}

/// Lists the items below their threshold.
pub fn write_low_stock<W: Write + ?Sized>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    let low = inventory.low_stock();

    if low.is_empty() {
        return writeln!(out, "No items are below their low-stock threshold.");
    }

    writeln!(out, "Low-stock items ({}):", low.len())?;
    for item in low {
        writeln!(
            out,
            "  {}: {} on hand, threshold {}",
            item.name, item.quantity, item.threshold
        )?;
    }
    Ok(())
}

/// Prints every item with its stock value and sales, then the totals.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    inventory: &Inventory,
    display: &DisplaySettings,
) -> io::Result<()> {
    if inventory.is_empty() {
        return writeln!(out, "No items in inventory.");
    }

    let report = inventory.report();
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(
        out,
        "{:<24} {:>6} {:>12} {:>12} {:>14}",
        "Name", "Qty", "Price", "Value", "Sales"
    )?;
    writeln!(out, "{}", rule)?;

    for line in &report.lines {
        let row = format!(
            "{:<24} {:>6} {:>12} {:>12} {:>14}",
            line.name,
            line.quantity,
            display.price(line.price),
            display.price(line.value),
            display.sales(line.cumulative_sales)
        );
        if line.low_stock {
            writeln!(out, "{}  LOW", row)?;
        } else {
            writeln!(out, "{}", row)?;
        }
    }

    writeln!(out, "{}", rule)?;
    writeln!(out, "Total stock value: {}", display.price(report.total_value))?;
    writeln!(out, "Total sales: {}", display.sales(report.total_sales))?;

    let noun = if report.lines.len() == 1 { "item" } else { "items" };
    writeln!(
        out,
        "{} {}, {} low on stock",
        report.lines.len(),
        noun,
        report.low_stock_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, NewItem};

    fn shop() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Basmati Rice", 10, Money::from_cents(1250), 3))
            .unwrap();
        inventory
            .add_item(NewItem::new("Green Tea", 2, Money::from_cents(450), 5))
            .unwrap();
        inventory.record_sale("Basmati Rice", 4).unwrap();
        inventory
    }

    fn render_report(inventory: &Inventory) -> String {
        let mut out = Vec::new();
        write_report(&mut out, inventory, &DisplaySettings::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_rows_and_totals() {
        let text = render_report(&shop());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("Basmati Rice"));
        assert!(lines[2].contains("$75.00"));
        assert!(lines[2].contains("Rs 4150.00"));
        assert!(!lines[2].ends_with("LOW"));
        assert!(lines[3].starts_with("Green Tea"));
        assert!(lines[3].ends_with("LOW"));

        assert!(text.contains("Total stock value: $84.00\n"));
        assert!(text.contains("Total sales: Rs 4150.00\n"));
        assert!(text.ends_with("2 items, 1 low on stock\n"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&Inventory::new()), "No items in inventory.\n");
    }

    #[test]
    fn test_low_stock_listing() {
        let mut out = Vec::new();
        write_low_stock(&mut out, &shop()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Low-stock items (1):\n  Green Tea: 2 on hand, threshold 5\n"
        );
    }

    #[test]
    fn test_nothing_low() {
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Soap", 12, Money::from_cents(99), 4))
            .unwrap();

        let mut out = Vec::new();
        write_low_stock(&mut out, &inventory).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No items are below their low-stock threshold.\n"
        );
    }

    #[test]
    fn test_menu_entries_do_not_change_anything() {
        let inventory = shop();
        let mut console = Console::new(io::empty(), Vec::new());

        assert_eq!(
            report(&inventory, &mut console, &DisplaySettings::default()).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            low_stock_check(&inventory, &mut console).unwrap(),
            Outcome::Unchanged
        );
    }
}
