//! Pull-style enumeration over the slot array.
//!
//! Two views of one traversal: [`Cursor`] exposes the explicit
//! init/valid/advance triple, and [`Iter`] adapts a cursor to the standard
//! `Iterator` trait. Order is slot-array order, which depends on capacity
//! and insertion history; treat it as unspecified.

use crate::table::{Entry, Slot};

/// An explicit cursor over a table's occupied entries.
///
/// Freshly created cursors sit on the first occupied entry (or are
/// immediately exhausted for an empty table). The shared borrow on the
/// table's slots rules out structural modification while a cursor lives.
///
/// ```
/// use fixed_table::{DirectTable, TINY_CAPACITY};
///
/// let mut t: DirectTable<&str> = DirectTable::with_capacity(TINY_CAPACITY);
/// t.insert(1u32, "one").unwrap();
/// t.insert(2u32, "two").unwrap();
///
/// let mut seen = 0;
/// let mut cur = t.cursor();
/// while cur.valid() {
///     let entry = cur.entry().unwrap();
///     assert!(*entry.key() == 1 || *entry.key() == 2);
///     seen += 1;
///     cur.advance();
/// }
/// assert_eq!(seen, 2);
/// ```
pub struct Cursor<'a, K, V> {
    slots: &'a [Slot<K, V>],
    pos: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(slots: &'a [Slot<K, V>]) -> Self {
        let mut cursor = Cursor { slots, pos: 0 };
        cursor.skip_to_occupied();
        cursor
    }

    fn skip_to_occupied(&mut self) {
        while let Some(slot) = self.slots.get(self.pos) {
            if matches!(slot, Slot::Occupied(_)) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Is the cursor positioned on an entry, or exhausted?
    pub fn valid(&self) -> bool {
        self.pos < self.slots.len()
    }

    /// The entry under the cursor, or `None` once exhausted.
    pub fn entry(&self) -> Option<&'a Entry<K, V>> {
        match self.slots.get(self.pos)? {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Step to the next occupied entry and return it, or `None` when the
    /// table is exhausted.
    pub fn advance(&mut self) -> Option<&'a Entry<K, V>> {
        if !self.valid() {
            return None;
        }
        self.pos += 1;
        self.skip_to_occupied();
        self.entry()
    }
}

/// Standard iterator over a table's occupied entries; see
/// [`FixedTable::iter`](crate::FixedTable::iter).
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(cursor: Cursor<'a, K, V>) -> Self {
        Iter { cursor }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor.entry()?;
        self.cursor.advance();
        Some(entry)
    }
}
