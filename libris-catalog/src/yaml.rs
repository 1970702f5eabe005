//! YAML seed loading.
//!
//! A seed file pre-populates a fresh catalog at session start. Nothing is
//! ever written back.

use std::path::Path;

use libris_core::{Item, LateFeePolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid seed entry in {path}: {message}")]
    InvalidEntry { path: String, message: String },
    #[error("Invalid seed entry in {path}: {source}")]
    Catalog { path: String, source: CatalogError },
}

/// One entry of a seed file.
///
/// Entries with both `author` and `isbn` become books; entries with neither
/// become general items. Supplying only one of the two is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEntry {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub copies: u32,
}

impl SeedEntry {
    fn into_item(self) -> Result<Item, String> {
        match (self.author, self.isbn) {
            (Some(author), Some(isbn)) => Ok(Item::book(self.title, author, isbn, self.copies)),
            (None, None) => Ok(Item::new(self.title, self.copies)),
            _ => Err(format!(
                "\"{}\" needs both author and isbn to be a book",
                self.title
            )),
        }
    }
}

/// Parse a YAML sequence of [`SeedEntry`] records.
pub fn parse_seed(contents: &str, path: &str) -> Result<Vec<SeedEntry>, YamlError> {
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: path.to_string(),
        source: e,
    })
}

/// Load a seed file into a new catalog that charges fees under `policy`.
pub fn load_seed(path: &Path, policy: LateFeePolicy) -> Result<Catalog, YamlError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: display.clone(),
        source: e,
    })?;
    let entries = parse_seed(&contents, &display)?;

    let mut catalog = Catalog::with_policy(policy);
    for entry in entries {
        let item = entry
            .into_item()
            .map_err(|message| YamlError::InvalidEntry {
                path: display.clone(),
                message,
            })?;
        catalog.add(item).map_err(|e| YamlError::Catalog {
            path: display.clone(),
            source: e,
        })?;
    }

    log::debug!("Seeded {} items from {}", catalog.len(), display);
    Ok(catalog)
}
