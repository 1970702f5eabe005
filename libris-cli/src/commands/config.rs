use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::LendingArgs;
use crate::settings::{self, Resolved, SessionConfig};

/// Show the effective lending settings and their sources.
pub(crate) fn run_config_show(args: &LendingArgs) -> Result<(), CliError> {
    let path = settings::settings_path();
    let settings = settings::load_settings()?;
    let config = SessionConfig::resolve(args, &settings);

    log::info!(
        "{}",
        "Lending Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    show_field("loan_period_days", &config.loan_period_days);
    show_field("daily_fee", &config.daily_fee);
    show_field("currency", &config.currency);
    let seed = Resolved {
        value: config
            .seed
            .value
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string()),
        source: config.seed.source,
    };
    show_field("seed", &seed);

    Ok(())
}

fn show_field<T: std::fmt::Display>(name: &str, field: &Resolved<T>) {
    log::info!(
        "  {:<18} {} {}",
        name,
        field.value.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", field.source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}
