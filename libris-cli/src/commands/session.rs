use std::io;

use libris_catalog::Catalog;

use crate::CliError;
use crate::cli_types::LendingArgs;
use crate::settings::{self, SessionConfig};
use crate::shell::Shell;

/// Build the session catalog and hand the terminal to the interactive menu.
pub(crate) fn run_session(args: &LendingArgs) -> Result<(), CliError> {
    let settings = settings::load_settings()?;
    let config = SessionConfig::resolve(args, &settings);
    let catalog = build_catalog(&config)?;

    log::debug!(
        "Session started: {} items, {}-day loans at {} {} per day",
        catalog.len(),
        config.loan_period_days.value,
        config.daily_fee.value,
        config.currency.value,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog, config.currency.value, stdin.lock(), stdout.lock());
    shell.run()?;
    Ok(())
}

fn build_catalog(config: &SessionConfig) -> Result<Catalog, CliError> {
    match &config.seed.value {
        Some(path) => {
            let catalog = libris_catalog::load_seed(path, config.policy())?;
            log::debug!("Loaded {} items from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::with_policy(config.policy())),
    }
}
