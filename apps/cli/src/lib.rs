//! # stockroom-cli: Terminal Front End for Stockroom
//!
//! The `stockroom` binary: a numbered menu over one inventory file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockroom (this crate)                           │
//! │                                                                         │
//! │  main.rs ──────► parses flags, calls run(), maps errors to exit code   │
//! │                                                                         │
//! │  lib.rs ───────► config → logging → store → session / one-shot report  │
//! │                                                                         │
//! │  session.rs ───► menu loop, saves after every change                   │
//! │                                                                         │
//! │  commands/ ────► add_item, update_stock, delete_item, record_sale,     │
//! │                  low_stock_check, report                               │
//! │                                                                         │
//! │  config.rs ────► StockroomConfig (TOML + STOCKROOM_* env)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//!          │                                   │
//!          ▼                                   ▼
//!   stockroom-core (rules)            stockroom-store (inventory.json)
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration (file, then environment)
//! 2. Initialize tracing (stderr, so the menu on stdout stays clean)
//! 3. Open the file store at the resolved data path
//! 4. Run the menu, or print one report and exit

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

pub use cli::{Cli, Command};
pub use config::StockroomConfig;
pub use error::{AppError, AppResult, ErrorCode};
pub use session::Session;

use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_core::Inventory;
use stockroom_store::{FileStore, ItemStore};

use commands::report::{write_low_stock, write_report};
use config::DisplaySettings;
use console::Console;

/// Runs the application for parsed command-line flags.
///
/// ## Errors
/// Startup failures (bad config, unreadable or corrupt inventory file) and
/// terminal I/O failures. Everything that goes wrong inside the menu is
/// reported there and does not end the run.
pub fn run(cli: Cli) -> AppResult<()> {
    let config = StockroomConfig::load(cli.config.clone())?;
    init_tracing(&config.log.level, cli.verbose);

    info!("Starting Stockroom");

    let store_config = config.store_config(cli.data_file.as_deref());
    info!(path = %store_config.path.display(), "Inventory file determined");

    match cli.command {
        Some(command) => {
            // A one-shot report never creates the file, so a mistyped path fails.
            let store = FileStore::new(store_config.create_if_missing(false));
            let mut stdout = io::stdout().lock();
            run_once(command, &store, &mut stdout, &config.display)?;
            stdout.flush()?;
        }
        None => {
            let store = FileStore::new(store_config);
            let console = Console::new(io::stdin().lock(), io::stdout());
            let mut session = Session::open(store, console, config.display.clone())?;
            session.run()?;
        }
    }

    Ok(())
}

/// Loads the inventory once and prints the report a subcommand asks for.
pub fn run_once<S: ItemStore, W: Write>(
    command: Command,
    store: &S,
    out: &mut W,
    display: &DisplaySettings,
) -> AppResult<()> {
    let inventory = Inventory::from_items(store.load()?);
    match command {
        Command::Report => write_report(out, &inventory, display)?,
        Command::LowStock => write_low_stock(out, &inventory)?,
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--verbose` - debug for everything
/// - `RUST_LOG=stockroom_store=trace` - standard env filter syntax
/// - Default: the `[log] level` from config (`warn,stockroom=info`)
///
/// Output goes to stderr.
pub fn init_tracing(default_directive: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
    };

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, NewItem};
    use stockroom_store::StoreConfig;
    use tempfile::TempDir;

    fn report_store(dir: &TempDir) -> FileStore {
        FileStore::new(
            StoreConfig::new(dir.path().join("inventory.json")).create_if_missing(false),
        )
    }

    #[test]
    fn test_report_on_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = report_store(&dir);
        let mut out = Vec::new();

        let err = run_once(Command::Report, &store, &mut out, &DisplaySettings::default())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.starts_with("Inventory file not found"));
        assert!(out.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_low_stock_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = report_store(&dir);
        let mut inventory = Inventory::new();
        inventory
            .add_item(NewItem::new("Green Tea", 2, Money::from_cents(450), 5))
            .unwrap();
        store.save(inventory.items()).unwrap();
        let mut out = Vec::new();

        run_once(Command::LowStock, &store, &mut out, &DisplaySettings::default()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Green Tea: 2 on hand, threshold 5"));
    }
}
