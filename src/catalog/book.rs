//! Books, identified by ISBN

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::validation::{in_range, required, ValidationError};

pub const MIN_BOOK_YEAR: i32 = 1000;
pub const MAX_BOOK_YEAR: i32 = 2030;

/// A book in the catalog
///
/// Two books with the same ISBN are the same book, whatever their other
/// fields say. Equality and hashing only look at `isbn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    isbn: String,
}

/// Unvalidated wire shape; decoding goes through [`Book::new`]
#[derive(Deserialize)]
struct BookRecord {
    title: String,
    author: String,
    year: i32,
    isbn: String,
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Book::new(&record.title, &record.author, record.year, &record.isbn)
    }
}

impl Book {
    pub fn new(title: &str, author: &str, year: i32, isbn: &str) -> Result<Self, ValidationError> {
        let title = required("title", title)?;
        let author = required("author", author)?;
        let isbn = required("isbn", isbn)?;
        let year = in_range("year", year, MIN_BOOK_YEAR, MAX_BOOK_YEAR)?;

        Ok(Self {
            title,
            author,
            year,
            isbn,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn description(&self) -> String {
        format!(
            "Book: {} by {} ({}) [ISBN {}]",
            self.title, self.author, self.year, self.isbn
        )
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
