//! Logged construction of catalog items
//!
//! The factory is what the CLI uses to turn raw user input into items. It
//! adds nothing to validation beyond the constructors themselves; it only
//! records each attempt in the log.

use tracing::{info, warn};

use super::{Book, Collection, Disc, Magazine, ValidationError};

#[derive(Debug, Default, Clone, Copy)]
pub struct ItemFactory;

impl ItemFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn book(
        &self,
        title: &str,
        author: &str,
        year: i32,
        isbn: &str,
    ) -> Result<Book, ValidationError> {
        logged("book", title, Book::new(title, author, year, isbn))
    }

    pub fn magazine(
        &self,
        title: &str,
        issue: i32,
        publisher: &str,
        year: i32,
    ) -> Result<Magazine, ValidationError> {
        logged("magazine", title, Magazine::new(title, issue, publisher, year))
    }

    pub fn disc(
        &self,
        title: &str,
        director: &str,
        duration: i32,
        year: i32,
    ) -> Result<Disc, ValidationError> {
        logged("dvd", title, Disc::new(title, director, duration, year))
    }

    pub fn collection(&self, name: &str) -> Result<Collection, ValidationError> {
        logged("collection", name, Collection::new(name))
    }
}

fn logged<T>(
    kind: &'static str,
    title: &str,
    result: Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    match &result {
        Ok(_) => info!(kind, title = title.trim(), "Created catalog item"),
        Err(e) => warn!(kind, field = e.field(), "Rejected catalog item: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_valid_items() {
        let factory = ItemFactory::new();
        let book = factory
            .book("Test Book", "Test Author", 2020, "123456789")
            .unwrap();

        assert_eq!(book.title(), "Test Book");
        assert_eq!(book.author(), "Test Author");
        assert_eq!(book.year(), 2020);
        assert_eq!(book.isbn(), "123456789");
        assert!(factory.collection("Shelf").is_ok());
    }

    #[test]
    fn test_factory_passes_errors_through() {
        let factory = ItemFactory::new();

        assert_eq!(
            factory.book("", "Author", 2020, "123456789").unwrap_err(),
            ValidationError::Blank { field: "title" }
        );
        assert_eq!(
            factory.book("Title", "Author", 1800, "123456789").unwrap_err().field(),
            "year"
        );
        assert!(factory.magazine("T", -4, "P", 2000).is_err());
        assert!(factory.disc("T", "D", 90, 1850).is_err());
    }
}
