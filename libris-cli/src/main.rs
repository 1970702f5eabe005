//! libris CLI
//!
//! Interactive front end for an in-memory library catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;
mod shell;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::session::run_session(&cli.lending),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&cli.lending),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
