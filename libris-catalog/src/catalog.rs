//! The in-memory catalog: ordered storage, ISBN lookup, and search.

use chrono::{DateTime, Utc};
use libris_core::{Fee, Item, ItemKindTag, LateFeePolicy, LendingError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no book with ISBN {0}")]
    NotFound(String),

    #[error("a book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    #[error(transparent)]
    Lending(#[from] LendingError),
}

/// Ordered collection of items, keyed for books by ISBN.
///
/// Items keep their insertion order. At most one book per ISBN.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    policy: LateFeePolicy,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog that charges late fees under `policy`.
    pub fn with_policy(policy: LateFeePolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &LateFeePolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Books whose ISBN is already present are rejected.
    pub fn add(&mut self, item: Item) -> Result<(), CatalogError> {
        if let Some(isbn) = item.isbn() {
            if self.find_by_isbn(isbn).is_some() {
                return Err(CatalogError::DuplicateIsbn(isbn.to_string()));
            }
        }
        log::debug!(
            "Added {} \"{}\" ({} copies)",
            item.kind().tag(),
            item.title(),
            item.available_copies()
        );
        self.items.push(item);
        Ok(())
    }

    /// First book whose ISBN is exactly `isbn` (case-sensitive).
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.isbn() == Some(isbn))
    }

    pub fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.isbn() == Some(isbn))
    }

    /// Every item, books or not, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items_of_kind(&self, kind: ItemKindTag) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.kind().tag() == kind)
    }

    pub fn books(&self) -> impl Iterator<Item = &Item> {
        self.items_of_kind(ItemKindTag::Book)
    }

    /// Books whose title or author contains `query`, ignoring case.
    ///
    /// An empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        self.books()
            .filter(|book| {
                book.title().to_lowercase().contains(&needle)
                    || book
                        .author()
                        .is_some_and(|author| author.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Borrow one copy of the book with the given ISBN.
    pub fn borrow_by_isbn(&mut self, isbn: &str, now: DateTime<Utc>) -> Result<(), CatalogError> {
        let book = self
            .find_by_isbn_mut(isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        book.borrow(now)?;
        Ok(())
    }

    /// Return the book with the given ISBN and report the late fee.
    ///
    /// The fee is computed from the loan start recorded when the book was
    /// borrowed, with `now` as the return date.
    pub fn return_by_isbn(&mut self, isbn: &str, now: DateTime<Utc>) -> Result<Fee, CatalogError> {
        let policy = self.policy;
        let book = self
            .find_by_isbn_mut(isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        let borrowed_at = book.borrowed_at().ok_or(LendingError::NotBorrowed)?;
        Ok(book.return_item_with(&policy, now, borrowed_at)?)
    }
}
