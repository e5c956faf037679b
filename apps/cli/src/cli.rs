//! Command-line flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    about = "Inventory tracker for a small retail shop",
    version
)]
pub struct Cli {
    /// Run one read-only command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Inventory file to use (overrides config and STOCKROOM_DATA_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the stock report and exit
    Report,
    /// List items below their low-stock threshold and exit
    LowStock,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_and_subcommands() {
        let cli =
            Cli::try_parse_from(["stockroom", "low-stock", "--data-file", "shop.json", "-v"])
                .unwrap();
        assert_eq!(cli.command, Some(Command::LowStock));
        assert_eq!(cli.data_file, Some(PathBuf::from("shop.json")));
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["stockroom", "--config", "c.toml", "report"]).unwrap();
        assert_eq!(cli.command, Some(Command::Report));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["stockroom", "sell"]).is_err());
    }
}
