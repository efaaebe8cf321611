//! The closed set of catalog entries

use serde::{Deserialize, Serialize};
use std::fmt;

use super::visitor::{walk, CatalogVisitor};
use super::{Book, Collection, Disc, Magazine};

/// Any catalog entry: a leaf (book, magazine, disc) or a nested collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Book(Book),
    Magazine(Magazine),
    Disc(Disc),
    Collection(Collection),
}

impl Item {
    /// Title of the entry; a collection's title is its name
    pub fn title(&self) -> &str {
        match self {
            Item::Book(book) => book.title(),
            Item::Magazine(magazine) => magazine.title(),
            Item::Disc(disc) => disc.title(),
            Item::Collection(collection) => collection.name(),
        }
    }

    /// One-line human readable summary
    pub fn description(&self) -> String {
        match self {
            Item::Book(book) => book.description(),
            Item::Magazine(magazine) => magazine.description(),
            Item::Disc(disc) => disc.description(),
            Item::Collection(collection) => collection.description(),
        }
    }

    /// Short lowercase name of the variant, used in logs and listings
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Book(_) => "book",
            Item::Magazine(_) => "magazine",
            Item::Disc(_) => "dvd",
            Item::Collection(_) => "collection",
        }
    }

    /// Apply `visitor` to this entry and, for collections, every descendant
    pub fn accept<V: CatalogVisitor + ?Sized>(&self, visitor: &mut V) {
        walk(self, visitor);
    }

    pub(crate) fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Collection(collection) => collection.render(depth, f),
            leaf => writeln!(f, "{:indent$}{}", "", leaf.description(), indent = depth * 2),
        }
    }
}

// Each variant compares by its own rule: books by ISBN, everything else by value.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Book(a), Item::Book(b)) => a == b,
            (Item::Magazine(a), Item::Magazine(b)) => a == b,
            (Item::Disc(a), Item::Disc(b)) => a == b,
            (Item::Collection(a), Item::Collection(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(0, f)
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Magazine> for Item {
    fn from(magazine: Magazine) -> Self {
        Item::Magazine(magazine)
    }
}

impl From<Disc> for Item {
    fn from(disc: Disc) -> Self {
        Item::Disc(disc)
    }
}

impl From<Collection> for Item {
    fn from(collection: Collection) -> Self {
        Item::Collection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_per_variant() {
        let book = Item::from(Book::new("Dune", "Frank Herbert", 1965, "isbn-1").unwrap());
        let mag = Item::from(Magazine::new("Wired", 3, "Conde Nast", 2001).unwrap());
        let disc = Item::from(Disc::new("Alien", "Ridley Scott", 117, 1979).unwrap());
        let coll = Item::from(Collection::new("  Sci-Fi ").unwrap());

        assert_eq!(book.title(), "Dune");
        assert_eq!(mag.title(), "Wired");
        assert_eq!(disc.title(), "Alien");
        assert_eq!(coll.title(), "Sci-Fi");
        assert_eq!(coll.kind(), "collection");
    }

    #[test]
    fn test_cross_variant_items_never_equal() {
        let mut a = Collection::new("Same").unwrap();
        let b = Collection::new("Same").unwrap();
        assert_eq!(Item::from(a.clone()), Item::from(b.clone()));

        a.add_item(Item::from(Disc::new("Alien", "Ridley Scott", 117, 1979).unwrap()));
        assert_ne!(Item::from(a), Item::from(b));

        let book = Item::from(Book::new("Alien", "Alan Dean Foster", 1979, "x").unwrap());
        let disc = Item::from(Disc::new("Alien", "Ridley Scott", 117, 1979).unwrap());
        assert_ne!(book, disc);
    }
}
