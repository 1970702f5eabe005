//! Catalog entries and their lending lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::fee::{Fee, LateFeePolicy};

// ── Kind ────────────────────────────────────────────────────────────────────

/// What sort of entry an [`Item`] is, with the fields specific to that sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A plain item with only a title and copy count.
    General,
    /// A book, keyed in the catalog by ISBN.
    Book { author: String, isbn: String },
}

impl ItemKind {
    pub fn tag(&self) -> ItemKindTag {
        match self {
            Self::General => ItemKindTag::General,
            Self::Book { .. } => ItemKindTag::Book,
        }
    }
}

/// Field-less discriminant of [`ItemKind`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKindTag {
    General,
    Book,
}

impl ItemKindTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Book => "book",
        }
    }
}

impl std::fmt::Display for ItemKindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Lending status ──────────────────────────────────────────────────────────

/// Lending state of an item. Overdue-ness is not a state; it is computed on return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LendingStatus {
    Available,
    Borrowed,
}

impl std::fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Borrowed => f.write_str("borrowed"),
        }
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// A single catalog entry.
///
/// Tracks one outstanding loan per item: `borrowed` and `borrowed_at` describe
/// the most recent borrow, while `available_copies` is a plain counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    available_copies: u32,
    borrowed: bool,
    borrowed_at: Option<DateTime<Utc>>,
    kind: ItemKind,
}

impl Item {
    /// Create a general (non-book) item.
    pub fn new(title: impl Into<String>, available_copies: u32) -> Self {
        Self {
            title: title.into(),
            available_copies,
            borrowed: false,
            borrowed_at: None,
            kind: ItemKind::General,
        }
    }

    pub fn book(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        available_copies: u32,
    ) -> Self {
        Self {
            kind: ItemKind::Book {
                author: author.into(),
                isbn: isbn.into(),
            },
            ..Self::new(title, available_copies)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// When the outstanding loan started, if there is one.
    pub fn borrowed_at(&self) -> Option<DateTime<Utc>> {
        self.borrowed_at
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn is_book(&self) -> bool {
        matches!(self.kind, ItemKind::Book { .. })
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Book { author, .. } => Some(author),
            ItemKind::General => None,
        }
    }

    pub fn isbn(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Book { isbn, .. } => Some(isbn),
            ItemKind::General => None,
        }
    }

    pub fn status(&self) -> LendingStatus {
        if self.borrowed {
            LendingStatus::Borrowed
        } else {
            LendingStatus::Available
        }
    }

    /// Take one copy off the shelf and record `now` as the loan start.
    ///
    /// Fails without touching any state when no copies are available.
    pub fn borrow(&mut self, now: DateTime<Utc>) -> Result<(), LendingError> {
        if self.available_copies == 0 {
            return Err(LendingError::NoCopiesAvailable);
        }
        self.available_copies -= 1;
        self.borrowed = true;
        self.borrowed_at = Some(now);
        log::debug!(
            "Borrowed \"{}\" at {} ({} copies left)",
            self.title,
            now,
            self.available_copies
        );
        Ok(())
    }

    /// Put the copy back using the standard late-fee policy.
    pub fn return_item(
        &mut self,
        returned_at: DateTime<Utc>,
        borrowed_at: DateTime<Utc>,
    ) -> Result<Fee, LendingError> {
        self.return_item_with(&LateFeePolicy::STANDARD, returned_at, borrowed_at)
    }

    /// Put the copy back and compute the late fee under `policy`.
    ///
    /// Fails without touching any state when the item is not borrowed.
    pub fn return_item_with(
        &mut self,
        policy: &LateFeePolicy,
        returned_at: DateTime<Utc>,
        borrowed_at: DateTime<Utc>,
    ) -> Result<Fee, LendingError> {
        if !self.borrowed {
            return Err(LendingError::NotBorrowed);
        }
        self.available_copies = self.available_copies.saturating_add(1);
        self.borrowed = false;
        self.borrowed_at = None;

        let fee = policy.late_fee(borrowed_at, returned_at);
        log::debug!(
            "Returned \"{}\" at {} (late fee {})",
            self.title,
            returned_at,
            fee
        );
        Ok(fee)
    }

    /// Late fee under the standard policy. Pure; does not touch item state.
    pub fn calculate_late_fees(
        &self,
        returned_at: DateTime<Utc>,
        borrowed_at: DateTime<Utc>,
    ) -> Fee {
        LateFeePolicy::STANDARD.late_fee(borrowed_at, returned_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_book_is_available() {
        let book = Item::book("Dune", "Herbert", "001", 2);
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), Some("Herbert"));
        assert_eq!(book.isbn(), Some("001"));
        assert_eq!(book.available_copies(), 2);
        assert_eq!(book.status(), LendingStatus::Available);
        assert!(book.borrowed_at().is_none());
        assert!(book.is_book());
    }

    #[test]
    fn test_general_item_has_no_book_fields() {
        let item = Item::new("Projector", 1);
        assert_eq!(item.kind().tag(), ItemKindTag::General);
        assert_eq!(item.author(), None);
        assert_eq!(item.isbn(), None);
        assert!(!item.is_book());
    }

    #[test]
    fn test_borrow_decrements_and_marks_borrowed() {
        let mut book = Item::book("Dune", "Herbert", "001", 2);
        book.borrow(now()).unwrap();
        assert_eq!(book.available_copies(), 1);
        assert!(book.is_borrowed());
        assert_eq!(book.borrowed_at(), Some(now()));
    }

    #[test]
    fn test_borrow_with_no_copies_leaves_state_unchanged() {
        let mut book = Item::book("Dune", "Herbert", "001", 0);
        let before = book.clone();
        assert_eq!(book.borrow(now()), Err(LendingError::NoCopiesAvailable));
        assert_eq!(book, before);
    }

    #[test]
    fn test_return_restores_copy_and_clears_loan() {
        let mut book = Item::book("Dune", "Herbert", "001", 1);
        book.borrow(now()).unwrap();
        let fee = book
            .return_item(now() + Duration::days(3), now())
            .unwrap();
        assert_eq!(fee, Fee::ZERO);
        assert_eq!(book.available_copies(), 1);
        assert!(!book.is_borrowed());
        assert!(book.borrowed_at().is_none());
    }

    #[test]
    fn test_return_when_not_borrowed_is_rejected() {
        let mut book = Item::book("Dune", "Herbert", "001", 1);
        let before = book.clone();
        assert_eq!(
            book.return_item(now(), now()),
            Err(LendingError::NotBorrowed)
        );
        assert_eq!(book, before);
    }

    #[test]
    fn test_return_late_charges_fee() {
        let mut book = Item::book("Dune", "Herbert", "001", 2);
        let borrowed = now() - Duration::days(28);
        book.borrow(borrowed).unwrap();
        let fee = book.return_item(now(), borrowed).unwrap();
        assert_eq!(fee, Fee::from_units(28));
        assert_eq!(book.available_copies(), 2);
    }

    #[test]
    fn test_return_with_custom_policy() {
        let mut item = Item::new("Projector", 1);
        let borrowed = now() - Duration::days(10);
        item.borrow(borrowed).unwrap();
        let fee = item
            .return_item_with(&LateFeePolicy::new(7, 5), now(), borrowed)
            .unwrap();
        assert_eq!(fee, Fee::from_units(15));
    }

    #[test]
    fn test_calculate_late_fees_is_pure() {
        let book = Item::book("Dune", "Herbert", "001", 1);
        let fee = book.calculate_late_fees(now(), now() - Duration::days(20));
        assert_eq!(fee, Fee::from_units(12));
        assert_eq!(book.available_copies(), 1);
        assert!(!book.is_borrowed());
    }
}
