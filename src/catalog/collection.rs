//! Named, ordered containers of catalog items
//!
//! A [`Collection`] is itself an [`Item`], so collections nest. Decoding
//! stops at [`MAX_NESTING_DEPTH`] levels.
//! The only way to change one is to add or remove direct children; every
//! accessor that hands out children returns an owned copy.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::Cell;
use std::fmt;
use tracing::debug;

use super::cursor::Cursor;
use super::search::SearchVisitor;
use super::validation::{required, ValidationError};
use super::Item;

/// Deepest chain of collections a catalog may have, the root included
///
/// Decoding refuses anything deeper, so a crafted file cannot exhaust the
/// stack, and storage refuses to save anything it could not read back.
pub const MAX_NESTING_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    name: String,
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct CollectionRecord {
    name: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl TryFrom<CollectionRecord> for Collection {
    type Error = ValidationError;

    fn try_from(record: CollectionRecord) -> Result<Self, Self::Error> {
        let mut collection = Collection::new(&record.name)?;
        collection.items = record.items;
        Ok(collection)
    }
}

thread_local! {
    static DECODE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Counts one level of collection nesting for as long as it is alive
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Option<Self> {
        DECODE_DEPTH.with(|depth| {
            if depth.get() >= MAX_NESTING_DEPTH {
                return None;
            }
            depth.set(depth.get() + 1);
            Some(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DECODE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let _guard = DepthGuard::enter().ok_or_else(|| {
            D::Error::custom(format!(
                "collections nested deeper than {MAX_NESTING_DEPTH} levels"
            ))
        })?;
        let record = CollectionRecord::deserialize(deserializer)?;
        Collection::try_from(record).map_err(D::Error::custom)
    }
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name)?,
            items: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item; `None` is ignored
    ///
    /// Children are not revalidated, they were checked when constructed.
    /// Adding the same item twice keeps both copies.
    pub fn add_item(&mut self, item: impl Into<Option<Item>>) {
        if let Some(item) = item.into() {
            debug!(
                collection = %self.name,
                kind = item.kind(),
                title = item.title(),
                "Adding item"
            );
            self.items.push(item);
        }
    }

    /// Remove the first direct child equal to `item`
    ///
    /// Returns whether anything was removed.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first direct child whose title matches exactly
    pub fn remove_by_title(&mut self, title: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.title() == title)?;
        Some(self.items.remove(index))
    }

    /// Find a direct child collection by name
    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.items.iter_mut().find_map(|item| match item {
            Item::Collection(collection) if collection.name == name => Some(collection),
            _ => None,
        })
    }

    /// Copy of the direct children, in insertion order
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Number of direct children (not recursive)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Length of the longest chain of collections from here down, this one included
    pub fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Collection(collection) => Some(collection.depth()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn description(&self) -> String {
        format!("{} ({} items)", self.name, self.items.len())
    }

    /// Cursor over a snapshot of the current direct children
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.items())
    }

    /// Case-insensitive search over this collection and all descendants
    pub fn search(&self, term: &str) -> Vec<Item> {
        let mut visitor = SearchVisitor::new(term);
        self.accept(&mut visitor);
        visitor.results()
    }

    /// Apply `visitor` to this collection, then to every descendant in pre-order
    pub fn accept<V: super::CatalogVisitor + ?Sized>(&self, visitor: &mut V) {
        super::visitor::walk_collection(self, visitor);
    }

    /// Borrowed view of the children, for traversal inside the crate
    pub(crate) fn children(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.description(), indent = depth * 2)?;
        for item in &self.items {
            item.render(depth + 1, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Book, Disc, Magazine};

    fn book(isbn: &str) -> Item {
        Item::from(Book::new("Title", "Author", 2000, isbn).unwrap())
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            Collection::new(" \n").unwrap_err(),
            ValidationError::Blank { field: "name" }
        );
    }

    #[test]
    fn test_add_preserves_order_and_ignores_none() {
        let mut collection = Collection::new("Shelf").unwrap();
        let (a, b, c) = (book("a"), book("b"), book("c"));

        collection.add_item(a.clone());
        collection.add_item(None);
        collection.add_item(b.clone());
        collection.add_item(c.clone());

        assert_eq!(collection.items(), vec![a.clone(), b.clone(), c.clone()]);

        assert!(collection.remove_item(&b));
        assert_eq!(collection.items(), vec![a, c]);
        assert!(!collection.remove_item(&b));
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut collection = Collection::new("Shelf").unwrap();
        let a = book("a");
        collection.add_item(a.clone());
        collection.add_item(a.clone());
        assert_eq!(collection.len(), 2);

        collection.remove_item(&a);
        assert_eq!(collection.items(), vec![a]);
    }

    #[test]
    fn test_remove_book_by_isbn_equality() {
        let mut collection = Collection::new("Shelf").unwrap();
        collection.add_item(Item::from(
            Book::new("Clean Code", "Robert C. Martin", 2008, "978-0132350884").unwrap(),
        ));

        let same_isbn =
            Item::from(Book::new("Different", "Nobody", 1990, "978-0132350884").unwrap());
        assert!(collection.remove_item(&same_isbn));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_items_returns_independent_copies() {
        let mut collection = Collection::new("Shelf").unwrap();
        collection.add_item(book("a"));

        let mut first = collection.items();
        let second = collection.items();
        first.push(book("b"));
        first.clear();

        assert_eq!(second.len(), 1);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_description_counts_direct_children_only() {
        let mut inner = Collection::new("Inner").unwrap();
        inner.add_item(book("a"));
        inner.add_item(book("b"));

        let mut outer = Collection::new("Outer").unwrap();
        outer.add_item(Item::from(inner));
        outer.add_item(book("c"));

        assert_eq!(outer.description(), "Outer (2 items)");
    }

    #[test]
    fn test_display_is_preorder_and_indented() {
        let mut inner = Collection::new("Films").unwrap();
        inner.add_item(Item::from(Disc::new("Alien", "Ridley Scott", 117, 1979).unwrap()));

        let mut root = Collection::new("Main").unwrap();
        root.add_item(Item::from(inner));
        root.add_item(Item::from(Magazine::new("Wired", 3, "Conde Nast", 2001).unwrap()));

        let expected = "\
Main (2 items)
  Films (1 items)
    DVD: Alien directed by Ridley Scott (1979, 117 min)
  Magazine: Wired #3 by Conde Nast (2001)
";
        assert_eq!(root.to_string(), expected);
    }

    #[test]
    fn test_remove_by_title_and_nested_lookup() {
        let mut root = Collection::new("Main").unwrap();
        root.add_item(Item::from(Collection::new("Tech").unwrap()));
        root.add_item(book("a"));

        root.collection_mut("Tech").unwrap().add_item(book("b"));
        assert!(root.collection_mut("Missing").is_none());

        let removed = root.remove_by_title("Tech").unwrap();
        assert_eq!(removed.description(), "Tech (1 items)");
        assert_eq!(root.len(), 1);
        assert!(root.remove_by_title("Tech").is_none());
    }

    /// A chain of `depth` collections, each holding the next
    fn chain(depth: usize) -> Collection {
        let mut current = Collection::new("Level 1").unwrap();
        for level in 2..=depth {
            let mut parent = Collection::new(&format!("Level {level}")).unwrap();
            parent.add_item(Item::from(current));
            current = parent;
        }
        current
    }

    #[test]
    fn test_depth_follows_deepest_branch() {
        let mut root = Collection::new("Root").unwrap();
        assert_eq!(root.depth(), 1);

        root.add_item(book("a"));
        root.add_item(Item::from(chain(3)));
        root.add_item(Item::from(chain(1)));
        assert_eq!(root.depth(), 4);
    }

    #[test]
    fn test_decode_stops_past_nesting_limit() {
        let at_limit = serde_json::to_string(&chain(MAX_NESTING_DEPTH)).unwrap();
        let decoded: Collection = serde_json::from_str(&at_limit).unwrap();
        assert_eq!(decoded.depth(), MAX_NESTING_DEPTH);

        let too_deep = serde_json::to_string(&chain(MAX_NESTING_DEPTH + 1)).unwrap();
        let err = serde_json::from_str::<Collection>(&too_deep).unwrap_err();
        assert!(err.to_string().contains("nested deeper than 32 levels"));

        // A failed decode leaves no depth behind for the next one
        let again: Collection = serde_json::from_str(&at_limit).unwrap();
        assert_eq!(again, decoded);
    }
}
