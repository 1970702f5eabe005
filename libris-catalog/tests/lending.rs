//! End-to-end lending scenarios against a fresh catalog.

use chrono::{DateTime, Duration, TimeZone, Utc};
use libris_catalog::{Catalog, CatalogError};
use libris_core::{Fee, Item, LendingError};

fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 16, 10, 30, 0).unwrap()
}

#[test]
fn dune_lending_walkthrough() {
    let mut catalog = Catalog::new();

    // Add a book
    catalog.add(Item::book("Dune", "Herbert", "001", 2)).unwrap();
    assert_eq!(catalog.books().count(), 1);
    assert_eq!(catalog.find_by_isbn("001").unwrap().available_copies(), 2);

    // Borrow it four weeks ago
    let borrowed_at = today() - Duration::days(28);
    catalog.borrow_by_isbn("001", borrowed_at).unwrap();
    let dune = catalog.find_by_isbn("001").unwrap();
    assert_eq!(dune.available_copies(), 1);
    assert!(dune.is_borrowed());

    // Return today: 14 days overdue at 2 per day
    let fee = catalog.return_by_isbn("001", today()).unwrap();
    assert_eq!(fee, Fee::from_units(28));
    assert_eq!(fee.to_string(), "28.00");
    let dune = catalog.find_by_isbn("001").unwrap();
    assert_eq!(dune.available_copies(), 2);
    assert!(!dune.is_borrowed());

    // Returning again is refused and changes nothing
    assert_eq!(
        catalog.return_by_isbn("001", today()),
        Err(CatalogError::Lending(LendingError::NotBorrowed))
    );
    assert_eq!(catalog.find_by_isbn("001").unwrap().available_copies(), 2);

    // Case-insensitive search
    let hits = catalog.search("dune");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Dune");

    // Same ISBN again is a duplicate
    assert_eq!(
        catalog.add(Item::book("Dune Messiah", "Herbert", "001", 1)),
        Err(CatalogError::DuplicateIsbn("001".to_string()))
    );
    assert_eq!(catalog.len(), 1);
}

#[test]
fn on_time_return_is_free() {
    let mut catalog = Catalog::new();
    catalog.add(Item::book("Dune", "Herbert", "001", 1)).unwrap();
    catalog
        .borrow_by_isbn("001", today() - Duration::days(14))
        .unwrap();
    assert_eq!(catalog.return_by_isbn("001", today()).unwrap(), Fee::ZERO);
}

#[test]
fn last_copy_cannot_be_borrowed_twice() {
    let mut catalog = Catalog::new();
    catalog.add(Item::book("Dune", "Herbert", "001", 1)).unwrap();
    catalog.borrow_by_isbn("001", today()).unwrap();
    assert_eq!(
        catalog.borrow_by_isbn("001", today()),
        Err(CatalogError::Lending(LendingError::NoCopiesAvailable))
    );
    assert_eq!(catalog.find_by_isbn("001").unwrap().available_copies(), 0);
}

#[test]
fn unknown_isbn_is_not_found() {
    let mut catalog = Catalog::new();
    assert_eq!(
        catalog.return_by_isbn("404", today()),
        Err(CatalogError::NotFound("404".to_string()))
    );
}
