//! Key-ownership modes.
//!
//! A table's key mode is fixed at construction and applies to every key it
//! holds. Rather than a runtime tag, the mode is the stored key type, so a
//! table can never mix modes or be queried with the wrong key shape:
//!
//! - **direct** — [`DirectTable`]: keys are inline `u32` scalars. No
//!   indirection, no separate storage; equality is a 4-byte compare.
//! - **indirect** — [`IndirectTable`]: keys are `&'k [u8]` borrows of
//!   caller-owned memory. The table never copies or frees key bytes, and
//!   the `'k` lifetime proves every key buffer outlives the table.
//! - **copyable** — [`OwnedTable`]: keys are `Box<[u8]>` copies made by the
//!   table during `insert` (via `Into<Box<[u8]>>` from the caller's
//!   `&[u8]`) and freed when the entry is removed or the table is dropped.
//!   Key borrows obtained from `find` or iteration point into the
//!   table-owned copy.
//!
//! Values are opaque to the table in every mode: it stores them, hands out
//! borrows, and returns them on `remove`, but never interprets or
//! dereferences what they designate.

use rustc_hash::FxBuildHasher;

use crate::table::FixedTable;

/// Direct key mode: inline 4-byte scalar keys (small integers, ids, packed
/// bit-patterns).
pub type DirectTable<V, S = FxBuildHasher> = FixedTable<u32, V, S>;

/// Indirect key mode: borrowed byte-string keys owned by the caller for the
/// table's whole lifetime.
pub type IndirectTable<'k, V, S = FxBuildHasher> = FixedTable<&'k [u8], V, S>;

/// Copyable key mode: byte-string keys copied into table-owned storage on
/// insert and freed on remove/drop.
pub type OwnedTable<V, S = FxBuildHasher> = FixedTable<Box<[u8]>, V, S>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TINY_CAPACITY;

    /// Invariant: an OwnedTable copies key bytes on insert; mutating the
    /// caller's buffer afterwards does not disturb lookups.
    #[test]
    fn owned_table_copies_key_bytes() {
        let mut t: OwnedTable<i32> = OwnedTable::with_capacity(TINY_CAPACITY);
        let mut buf = b"alpha".to_vec();
        t.insert(&buf[..], 1).unwrap();

        buf[0] = b'z';
        drop(buf);

        assert_eq!(t.get(b"alpha".as_slice()), Some(&1));
        assert_eq!(t.get(b"zlpha".as_slice()), None);
    }

    /// Invariant: an IndirectTable stores the caller's borrow itself;
    /// the key reference handed back by find points at the original buffer.
    #[test]
    fn indirect_table_borrows_key_bytes() {
        let buf = b"borrowed".to_vec();
        let mut t: IndirectTable<'_, i32> = IndirectTable::with_capacity(TINY_CAPACITY);
        t.insert(&buf[..], 7).unwrap();

        let entry = t.find(b"borrowed".as_slice()).unwrap();
        assert!(std::ptr::eq(entry.key().as_ptr(), buf.as_ptr()));
        assert_eq!(*entry.value(), 7);

        // Dropping the table leaves the caller's buffer untouched.
        drop(t);
        assert_eq!(buf, b"borrowed");
    }

    /// Invariant: direct keys need no backing storage at all.
    #[test]
    fn direct_table_scalar_keys() {
        let mut t: DirectTable<&str> = DirectTable::with_capacity(TINY_CAPACITY);
        t.insert(0xdead_beefu32, "cow").unwrap();
        assert_eq!(t.get(&0xdead_beef), Some(&"cow"));
        assert_eq!(t.remove(&0xdead_beef), Some((0xdead_beef, "cow")));
        assert!(t.is_empty());
    }
}
