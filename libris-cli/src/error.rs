use thiserror::Error;

use libris_catalog::YamlError;

use crate::settings::SettingsError;

/// Errors that can end a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal or a log file
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Seed file could not be loaded
    #[error("Seed error: {0}")]
    Seed(#[from] YamlError),

    /// Settings file could not be read
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Logger set-up failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
