//! Operations over a whole catalog tree
//!
//! A [`CatalogVisitor`] supplies one handler per item variant. The
//! dispatcher ([`walk`]) matches on the variant and calls exactly that
//! handler. For a collection it calls `visit_collection` first and then walks
//! each child in insertion order, so handlers fire in pre-order.
//!
//! All state lives in the visitor; the dispatch path keeps none, so walks
//! can be nested or repeated freely.

use super::{Book, Collection, Disc, Item, Magazine};

pub trait CatalogVisitor {
    fn visit_book(&mut self, book: &Book);
    fn visit_magazine(&mut self, magazine: &Magazine);
    fn visit_disc(&mut self, disc: &Disc);
    fn visit_collection(&mut self, collection: &Collection);
}

/// Dispatch `visitor` over `item` and, for collections, all its descendants
pub fn walk<V: CatalogVisitor + ?Sized>(item: &Item, visitor: &mut V) {
    match item {
        Item::Book(book) => visitor.visit_book(book),
        Item::Magazine(magazine) => visitor.visit_magazine(magazine),
        Item::Disc(disc) => visitor.visit_disc(disc),
        Item::Collection(collection) => walk_collection(collection, visitor),
    }
}

pub(crate) fn walk_collection<V: CatalogVisitor + ?Sized>(
    collection: &Collection,
    visitor: &mut V,
) {
    visitor.visit_collection(collection);
    for child in collection.children() {
        walk(child, visitor);
    }
}

/// Counts of each item kind across a whole tree
///
/// The collection the walk starts from is counted too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub books: usize,
    pub magazines: usize,
    pub discs: usize,
    pub collections: usize,
}

impl CatalogStats {
    pub fn of(collection: &Collection) -> Self {
        let mut stats = Self::default();
        collection.accept(&mut stats);
        stats
    }

    /// Leaf items only
    pub fn leaves(&self) -> usize {
        self.books + self.magazines + self.discs
    }
}

impl CatalogVisitor for CatalogStats {
    fn visit_book(&mut self, _: &Book) {
        self.books += 1;
    }

    fn visit_magazine(&mut self, _: &Magazine) {
        self.magazines += 1;
    }

    fn visit_disc(&mut self, _: &Disc) {
        self.discs += 1;
    }

    fn visit_collection(&mut self, _: &Collection) {
        self.collections += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which handlers fire
    #[derive(Default)]
    struct Trace(Vec<String>);

    impl CatalogVisitor for Trace {
        fn visit_book(&mut self, book: &Book) {
            self.0.push(format!("book:{}", book.title()));
        }

        fn visit_magazine(&mut self, magazine: &Magazine) {
            self.0.push(format!("magazine:{}", magazine.title()));
        }

        fn visit_disc(&mut self, disc: &Disc) {
            self.0.push(format!("disc:{}", disc.title()));
        }

        fn visit_collection(&mut self, collection: &Collection) {
            self.0.push(format!("collection:{}", collection.name()));
        }
    }

    fn sample_tree() -> Collection {
        let mut fantasy = Collection::new("Fantasy").unwrap();
        fantasy.add_item(Item::from(
            Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "1").unwrap(),
        ));

        let mut deep = Collection::new("Deep").unwrap();
        deep.add_item(Item::from(Disc::new("Alien", "Ridley Scott", 117, 1979).unwrap()));
        fantasy.add_item(Item::from(deep));

        let mut root = Collection::new("Root").unwrap();
        root.add_item(Item::from(fantasy));
        root.add_item(Item::from(Magazine::new("Wired", 3, "Conde Nast", 2001).unwrap()));
        root
    }

    #[test]
    fn test_preorder_dispatch() {
        let mut trace = Trace::default();
        sample_tree().accept(&mut trace);

        assert_eq!(
            trace.0,
            vec![
                "collection:Root",
                "collection:Fantasy",
                "book:The Hobbit",
                "collection:Deep",
                "disc:Alien",
                "magazine:Wired",
            ]
        );
    }

    #[test]
    fn test_leaf_fires_exactly_once() {
        let mut trace = Trace::default();
        let item = Item::from(Magazine::new("Wired", 3, "Conde Nast", 2001).unwrap());
        item.accept(&mut trace);
        assert_eq!(trace.0, vec!["magazine:Wired"]);
    }

    #[test]
    fn test_dyn_visitor_dispatch() {
        let mut stats = CatalogStats::default();
        let visitor: &mut dyn CatalogVisitor = &mut stats;
        walk(&Item::from(sample_tree()), visitor);

        assert_eq!(
            stats,
            CatalogStats {
                books: 1,
                magazines: 1,
                discs: 1,
                collections: 3,
            }
        );
        assert_eq!(stats.leaves(), 3);
    }

    #[test]
    fn test_walks_are_independent() {
        let tree = sample_tree();
        assert_eq!(CatalogStats::of(&tree), CatalogStats::of(&tree));
    }
}
