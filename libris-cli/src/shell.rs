//! Interactive menu over a catalog.
//!
//! One prompt, one catalog call, one rendered reply. Input validation that
//! only concerns raw text (empty fields, unparsable copy counts) happens
//! here; lending rules are left to the catalog.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use libris_catalog::{Catalog, CatalogError};
use libris_core::{Item, LendingError};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

const MENU_TITLE: &str = "Library Management System";

const MENU_ENTRIES: &[&str] = &[
    "1. Add a Book",
    "2. Borrow a Book",
    "3. Return a Book",
    "4. List Books",
    "5. Search for Books",
    "6. Quit",
];

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    ListBooks,
    SearchBooks,
    Quit,
}

impl std::str::FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddBook),
            "2" => Ok(Self::BorrowBook),
            "3" => Ok(Self::ReturnBook),
            "4" => Ok(Self::ListBooks),
            "5" => Ok(Self::SearchBooks),
            "6" | "q" | "quit" => Ok(Self::Quit),
            _ => Err(()),
        }
    }
}

/// Whether the menu loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub(crate) struct Shell<R, W> {
    catalog: Catalog,
    currency: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(catalog: Catalog, currency: impl Into<String>, input: R, output: W) -> Self {
        Self {
            catalog,
            currency: currency.into(),
            input,
            output,
        }
    }

    #[cfg(test)]
    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu until the user quits or input ends.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Choose an option:")? else {
                break;
            };
            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(()) => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        log::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::BorrowBook => self.borrow_book(),
            MenuChoice::ReturnBook => self.return_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::SearchBooks => self.search_books(),
            MenuChoice::Quit => {
                writeln!(self.output, "Exiting {}. Goodbye!", MENU_TITLE)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            MENU_TITLE.if_supports_color(Stdout, |t| t.bold())
        )?;
        for entry in MENU_ENTRIES {
            writeln!(self.output, "  {}", entry)?;
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` means input has ended.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter book title:")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter author:")? else {
            return Ok(Flow::Exit);
        };
        let Some(isbn) = self.prompt("Enter ISBN:")? else {
            return Ok(Flow::Exit);
        };
        let Some(copies) = self.prompt("Enter number of available copies:")? else {
            return Ok(Flow::Exit);
        };

        let fields_filled = !title.is_empty() && !author.is_empty() && !isbn.is_empty();
        let copies = match copies.parse::<u32>() {
            Ok(copies) if fields_filled => copies,
            _ => {
                writeln!(
                    self.output,
                    "All fields must be filled, and 'Available Copies' must be a valid number."
                )?;
                return Ok(Flow::Continue);
            }
        };

        match self.catalog.add(Item::book(title, author, isbn, copies)) {
            Ok(()) => self.success("Book added successfully.")?,
            Err(CatalogError::DuplicateIsbn(_)) => writeln!(
                self.output,
                "A book with the same ISBN already exists in the library."
            )?,
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt for an ISBN, rejecting empty input locally.
    fn prompt_isbn(&mut self, message: &str) -> io::Result<Option<Option<String>>> {
        let Some(isbn) = self.prompt(message)? else {
            return Ok(None);
        };
        if isbn.is_empty() {
            writeln!(self.output, "ISBN field must not be empty.")?;
            return Ok(Some(None));
        }
        Ok(Some(Some(isbn)))
    }

    fn borrow_book(&mut self) -> io::Result<Flow> {
        let isbn = match self.prompt_isbn("Enter ISBN of the book to borrow:")? {
            None => return Ok(Flow::Exit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(isbn)) => isbn,
        };

        match self.catalog.borrow_by_isbn(&isbn, Utc::now()) {
            Ok(()) => self.success("Book borrowed successfully.")?,
            Err(CatalogError::NotFound(_)) => self.failure("Book not found.")?,
            Err(CatalogError::Lending(LendingError::NoCopiesAvailable)) => {
                self.failure("No available copies of this book.")?
            }
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> io::Result<Flow> {
        let isbn = match self.prompt_isbn("Enter ISBN of the book to return:")? {
            None => return Ok(Flow::Exit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(isbn)) => isbn,
        };

        match self.catalog.return_by_isbn(&isbn, Utc::now()) {
            Ok(fee) => {
                if fee.is_zero() {
                    writeln!(self.output, "No late fees for this book.")?;
                } else {
                    writeln!(
                        self.output,
                        "Late fees for this book: {} {}",
                        fee.if_supports_color(Stdout, |t| t.yellow()),
                        self.currency
                    )?;
                }
                self.success("Book returned successfully.")?;
            }
            Err(CatalogError::NotFound(_)) => self.failure("Book not found.")?,
            Err(CatalogError::Lending(LendingError::NotBorrowed)) => {
                self.failure("You can only return a borrowed book.")?
            }
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> io::Result<Flow> {
        let lines: Vec<String> = self.catalog.books().map(describe_book).collect();
        if lines.is_empty() {
            writeln!(self.output, "No books in the library.")?;
        } else {
            writeln!(self.output, "All Books in the Library:")?;
            for line in lines {
                writeln!(self.output, "{}", line)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter search query (title or author):")? else {
            return Ok(Flow::Exit);
        };

        let lines: Vec<String> = self
            .catalog
            .search(&query)
            .into_iter()
            .map(describe_book)
            .collect();
        if lines.is_empty() {
            writeln!(self.output, "No matching books found.")?;
        } else {
            writeln!(self.output, "Matching Books:")?;
            for line in lines {
                writeln!(self.output, "{}", line)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            message
        )
    }

    fn failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            message
        )
    }
}

/// One listing line for a book.
pub(crate) fn describe_book(book: &Item) -> String {
    format!(
        "Title: {}, Author: {}, ISBN: {}, Available Copies: {}",
        book.title(),
        book.author().unwrap_or_default(),
        book.isbn().unwrap_or_default(),
        book.available_copies()
    )
}
