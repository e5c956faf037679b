//! # Interactive Session
//!
//! The menu loop: show the menu, read a choice, run the command, save.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session::run                                     │
//! │                                                                         │
//! │   ┌──────────────┐                                                     │
//! │   │ print menu   │◄───────────────────────────────────────────┐        │
//! │   └──────┬───────┘                                            │        │
//! │          ▼                                                    │        │
//! │   read choice ── EOF / "7" ──► Goodbye, return Ok             │        │
//! │          │                                                    │        │
//! │          ├── not 1-7 ──► "Invalid choice" ────────────────────┤        │
//! │          ▼                                                    │        │
//! │   run command                                                 │        │
//! │          │                                                    │        │
//! │          ├── Err (recoverable) ──► "Error: ..." ──────────────┤        │
//! │          ├── Unchanged ───────────────────────────────────────┤        │
//! │          └── Changed ──► store.save(all items) ───────────────┘        │
//! │                              │                                          │
//! │                              └── save failed ──► "Error: ..." (loop    │
//! │                                                   continues)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, error, info};

use stockroom_core::Inventory;
use stockroom_store::ItemStore;

use crate::commands::{item, report, sale, Outcome};
use crate::config::DisplaySettings;
use crate::console::Console;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::menu::MenuChoice;

/// An interactive session over one inventory.
pub struct Session<S, R, W> {
    inventory: Inventory,
    store: S,
    console: Console<R, W>,
    display: DisplaySettings,
}

impl<S: ItemStore, R: BufRead, W: Write> Session<S, R, W> {
    /// Loads the inventory from `store` and prepares the session.
    pub fn open(store: S, console: Console<R, W>, display: DisplaySettings) -> AppResult<Self> {
        let inventory = Inventory::from_items(store.load()?);
        info!(
            store = %store.describe(),
            items = inventory.len(),
            "Inventory opened"
        );

        Ok(Session {
            inventory,
            store,
            console,
            display,
        })
    }

    /// Runs the menu until Quit or end of input.
    ///
    /// ## Errors
    /// Only terminal I/O failures end the loop with an error. Bad answers,
    /// unknown items, oversells and failed saves are printed and the menu
    /// comes back.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(
            self.console,
            "Stockroom: {} item(s) loaded from {}",
            self.inventory.len(),
            self.store.describe()
        )?;

        loop {
            self.print_menu()?;

            let line = match self.console.read_line("Choose an option (1-7): ") {
                Ok(Some(line)) => line,
                Ok(None) => {
                    writeln!(self.console)?;
                    break;
                }
                Err(err) if !err.is_fatal() => {
                    writeln!(self.console, "Error: {}", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(
                        self.console,
                        "Invalid choice '{}'. Enter a number from 1 to 7.",
                        line.trim()
                    )?;
                    continue;
                }
            };

            if choice == MenuChoice::Quit {
                writeln!(self.console, "Goodbye.")?;
                break;
            }

            debug!(?choice, "Menu choice");
            match self.dispatch(choice) {
                Ok(Outcome::Changed) => self.persist()?,
                Ok(Outcome::Unchanged) => {}
                Err(err) if err.is_fatal() => {
                    if err.code == ErrorCode::InputClosed {
                        writeln!(self.console)?;
                        break;
                    }
                    return Err(err);
                }
                Err(err) => {
                    debug!(code = ?err.code, message = %err.message, "Command rejected");
                    writeln!(self.console, "Error: {}", err)?;
                }
            }
        }

        info!(items = self.inventory.len(), "Session ended");
        Ok(())
    }

    /// The in-memory inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Ends the session and hands back the output sink.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.console)?;
        writeln!(self.console, "=== Stockroom ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.console, "{}", choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<Outcome> {
        let inventory = &mut self.inventory;
        let console = &mut self.console;
        let display = &self.display;

        match choice {
            MenuChoice::AddItem => item::add_item(inventory, console, display),
            MenuChoice::UpdateStock => item::update_stock(inventory, console),
            MenuChoice::DeleteItem => item::delete_item(inventory, console),
            MenuChoice::RecordSale => sale::record_sale(inventory, console, display),
            MenuChoice::LowStock => report::low_stock_check(inventory, console),
            MenuChoice::Report => report::report(inventory, console, display),
            MenuChoice::Quit => Ok(Outcome::Unchanged),
        }
    }

    /// Writes the whole collection. A failure is reported, not fatal.
    fn persist(&mut self) -> AppResult<()> {
        if let Err(err) = self.store.save(self.inventory.items()) {
            error!(store = %self.store.describe(), error = %err, "Failed to save inventory");
            let err = AppError::from(err);
            writeln!(self.console, "Error: changes were not saved: {}", err)?;
        }
        Ok(())
    }
}
