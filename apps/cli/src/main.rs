//! # Stockroom Entry Point
//!
//! ```text
//! stockroom                      interactive menu
//! stockroom report               print the stock report and exit
//! stockroom low-stock            list low-stock items and exit
//! stockroom --data-file shop.json
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use clap::Parser;
use std::process::ExitCode;

use stockroom_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match stockroom_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stockroom: {}", err);
            ExitCode::FAILURE
        }
    }
}
