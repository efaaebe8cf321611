//! Forward-only walk over a collection's direct children
//!
//! A [`Cursor`] owns a copy of the children taken when it was created, so
//! later adds and removes on the collection never show up in it.

use super::Item;

#[derive(Debug, Clone)]
pub struct Cursor {
    items: Vec<Item>,
    position: usize,
}

impl Cursor {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items, position: 0 }
    }

    /// Whether at least one more item remains
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Number of items not yet returned
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl Iterator for Cursor {
    type Item = Item;

    /// Returns `None` once exhausted, on every later call too
    fn next(&mut self) -> Option<Item> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor {}

impl std::iter::FusedIterator for Cursor {}
