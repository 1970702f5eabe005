//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "Interactive in-memory library catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(flatten)]
    pub lending: LendingArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Lending settings that override `settings.toml`.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct LendingArgs {
    /// YAML file of books to load into the catalog at start-up
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Loan period in days before late fees apply (default: 14)
    #[arg(long, global = true)]
    pub loan_days: Option<u32>,

    /// Late fee per whole overdue day, in currency units (default: 2)
    #[arg(long, global = true)]
    pub daily_fee: Option<u64>,

    /// Currency label shown next to fees (default: rupees)
    #[arg(long, global = true)]
    pub currency: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start the interactive menu (the default)
    Shell,

    /// Inspect lending configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective lending settings and where each came from
    Show,

    /// Print the settings file path
    Path,
}
