use thiserror::Error;

/// A lending transition was attempted from the wrong state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LendingError {
    /// Borrow attempted while no copies are on the shelf.
    #[error("no available copies")]
    NoCopiesAvailable,

    /// Return attempted on an item with no outstanding loan.
    #[error("item is not currently borrowed")]
    NotBorrowed,
}
