//! Logger set-up for the `libris` binary.
//!
//! `info` lines are printed bare so they read as normal program output;
//! warnings and errors carry a level prefix. `--verbose` adds timestamps and
//! debug messages, `--quiet` drops everything below `warn`. `RUST_LOG`
//! still overrides the level when set.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

use crate::CliError;

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Call once, before any command runs.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();

    let to_file = logfile.is_some();
    if let Some(path) = logfile {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    } else {
        builder.target(Target::Stdout);
    }

    builder.format(move |buf, record| {
        let message = record.args().to_string();
        let message = if to_file {
            strip_ansi_escapes::strip_str(&message)
        } else {
            message
        };

        if verbose {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                message
            )
        } else if record.level() <= Level::Warn {
            writeln!(buf, "{}: {}", record.level(), message)
        } else {
            writeln!(buf, "{}", message)
        }
    });

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Log an empty line, used to space out blocks of `info` output.
pub(crate) fn log_blank() {
    log::info!("");
}
