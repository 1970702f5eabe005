//! In-memory library catalog: ordered item storage, ISBN lookup, search,
//! lending by ISBN, and YAML seed loading.

pub mod catalog;
pub mod yaml;

pub use catalog::{Catalog, CatalogError};
pub use yaml::{SeedEntry, YamlError, load_seed, parse_seed};
