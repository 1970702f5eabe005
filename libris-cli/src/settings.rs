//! Lending settings: `~/.config/libris/settings.toml` layered under CLI flags.
//!
//! Each value resolves through a priority chain:
//!
//! 1. CLI flag (if given)
//! 2. `settings.toml`
//! 3. Built-in default

use std::path::{Path, PathBuf};

use libris_core::LateFeePolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli_types::LendingArgs;

pub(crate) const DEFAULT_CURRENCY: &str = "rupees";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub lending: LendingSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LendingSettings {
    pub loan_period_days: Option<u32>,
    pub daily_fee: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogSettings {
    pub seed: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/libris/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("libris").join("settings.toml")
}

/// Load `settings.toml` from its canonical location.
pub(crate) fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields defaults; a malformed one is an error.
pub(crate) fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        log::debug!("No settings file at {}", path.display());
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Flag,
    SettingsFile,
    Default,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => f.write_str("command line"),
            Self::SettingsFile => f.write_str("settings file"),
            Self::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

fn resolve<T>(flag: Option<T>, file: Option<T>, default: T) -> Resolved<T> {
    match (flag, file) {
        (Some(value), _) => Resolved {
            value,
            source: Source::Flag,
        },
        (None, Some(value)) => Resolved {
            value,
            source: Source::SettingsFile,
        },
        (None, None) => Resolved {
            value: default,
            source: Source::Default,
        },
    }
}

/// Effective configuration for one shell session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionConfig {
    pub loan_period_days: Resolved<u32>,
    pub daily_fee: Resolved<u64>,
    pub currency: Resolved<String>,
    pub seed: Resolved<Option<PathBuf>>,
}

impl SessionConfig {
    pub(crate) fn resolve(args: &LendingArgs, settings: &Settings) -> Self {
        let standard = LateFeePolicy::STANDARD;
        Self {
            loan_period_days: resolve(
                args.loan_days,
                settings.lending.loan_period_days,
                standard.loan_period_days,
            ),
            daily_fee: resolve(
                args.daily_fee,
                settings.lending.daily_fee,
                standard.daily_fee,
            ),
            currency: resolve(
                args.currency.clone(),
                settings.lending.currency.clone(),
                DEFAULT_CURRENCY.to_string(),
            ),
            seed: resolve(
                args.seed.clone().map(Some),
                settings.catalog.seed.clone().map(Some),
                None,
            ),
        }
    }

    pub(crate) fn policy(&self) -> LateFeePolicy {
        LateFeePolicy::new(self.loan_period_days.value, self.daily_fee.value)
    }
}
