//! List: a growable ordered sequence of opaque items.
//!
//! A thin layer over `Vec` with the positional operations the rest of the
//! library's callers expect: append, insert-before-anchor, remove-by-value
//! and an early-exit visitor. Items are opaque to the list; it compares
//! them with `PartialEq` but never interprets what they designate.

use core::ops::ControlFlow;

/// Initial reserve for a fresh list.
const DEFAULT_RESERVE: usize = 10;

#[derive(Debug)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T: PartialEq> List<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_RESERVE),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `item` at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert `item` directly before the first occurrence of `anchor`,
    /// shifting later items along.
    ///
    /// If `anchor` is absent the list is unchanged and `item` is handed
    /// back in the `Err` variant.
    pub fn insert_before(&mut self, item: T, anchor: &T) -> Result<(), T> {
        match self.items.iter().position(|existing| existing == anchor) {
            Some(pos) => {
                self.items.insert(pos, item);
                Ok(())
            }
            None => Err(item),
        }
    }

    /// Remove and return the first occurrence of `item`; `None` (and no
    /// change) when absent.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let pos = self.items.iter().position(|existing| existing == item)?;
        Some(self.items.remove(pos))
    }

    /// Visit items front to back. A callback returning
    /// `ControlFlow::Break(b)` stops the scan; `for_each` then returns
    /// `Some(b)`, otherwise `None`.
    pub fn for_each<B, F>(&self, mut callback: F) -> Option<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        for item in &self.items {
            if let ControlFlow::Break(out) = callback(item) {
                return Some(out);
            }
        }
        None
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
