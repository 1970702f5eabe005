//! Lending domain model: catalog items, their borrow/return lifecycle,
//! and late-fee computation.

pub mod error;
pub mod fee;
pub mod item;

pub use error::LendingError;
pub use fee::{Fee, LateFeePolicy};
pub use item::{Item, ItemKind, ItemKindTag, LendingStatus};
