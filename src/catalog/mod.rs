//! Bookshelf Catalog - the composite item model and its traversals
//!
//! # Overview
//!
//! A catalog is a tree:
//! - Leaves are books, magazines and discs
//! - Inner nodes are named [`Collection`]s holding items in insertion order
//! - The root is an ordinary collection
//!
//! Two ways to walk it:
//! - [`CatalogVisitor`] + [`walk`]: visit a collection and every descendant,
//!   pre-order, with one handler per variant ([`SearchVisitor`], [`CatalogStats`])
//! - [`Cursor`]: flat, forward-only pass over a snapshot of one
//!   collection's direct children
//!
//! ```text
//! Main Catalog (Collection)
//!     ├── Fantasy (Collection)
//!     │      └── Book
//!     ├── Magazine
//!     └── Disc
//! ```
//!
//! Constructors are the only validation gate; once built, leaf items are
//! immutable.

mod book;
mod collection;
mod cursor;
mod demo;
mod disc;
mod factory;
mod item;
mod magazine;
mod search;
mod validation;
mod visitor;

pub use book::{Book, MAX_BOOK_YEAR, MIN_BOOK_YEAR};
pub use collection::{Collection, MAX_NESTING_DEPTH};
pub use cursor::Cursor;
pub use demo::{demo_catalog, DEMO_CATALOG_NAME};
pub use disc::Disc;
pub use factory::ItemFactory;
pub use item::Item;
pub use magazine::{Magazine, MAX_PERIODICAL_YEAR, MIN_PERIODICAL_YEAR};
pub use search::SearchVisitor;
pub use validation::ValidationError;
pub use visitor::{walk, CatalogStats, CatalogVisitor};
