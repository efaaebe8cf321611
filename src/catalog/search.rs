//! Case-insensitive substring search across a catalog tree

use super::{Book, CatalogVisitor, Collection, Disc, Item, Magazine};

/// Collects every item whose searchable fields contain the term
///
/// Searched fields per kind:
/// - book: title, author
/// - magazine: title, publisher
/// - disc: title, director
/// - collection: name
///
/// Results keep visitation order and are not deduplicated. An empty term
/// matches everything.
#[derive(Debug, Clone)]
pub struct SearchVisitor {
    term: String,
    results: Vec<Item>,
}

impl SearchVisitor {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
            results: Vec::new(),
        }
    }

    /// The normalised (trimmed, lowercased) term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Copy of the matches found so far
    pub fn results(&self) -> Vec<Item> {
        self.results.clone()
    }

    fn matches(&self, fields: &[&str]) -> bool {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&self.term))
    }
}

impl CatalogVisitor for SearchVisitor {
    fn visit_book(&mut self, book: &Book) {
        if self.matches(&[book.title(), book.author()]) {
            self.results.push(Item::Book(book.clone()));
        }
    }

    fn visit_magazine(&mut self, magazine: &Magazine) {
        if self.matches(&[magazine.title(), magazine.publisher()]) {
            self.results.push(Item::Magazine(magazine.clone()));
        }
    }

    fn visit_disc(&mut self, disc: &Disc) {
        if self.matches(&[disc.title(), disc.director()]) {
            self.results.push(Item::Disc(disc.clone()));
        }
    }

    fn visit_collection(&mut self, collection: &Collection) {
        if self.matches(&[collection.name()]) {
            self.results.push(Item::Collection(collection.clone()));
        }
    }
}
