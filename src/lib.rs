//! fixed-table: a fixed-capacity, open-addressed hash table keyed by raw
//! bytes or 4-byte scalars, plus small list and queue companions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a self-contained in-process container kit whose core is a hash
//!   table with a fixed slot count and explicit key-ownership modes, built
//!   so each piece can be reasoned about independently.
//! - Pieces:
//!   - `FixedTable<K, V, S>`: the open-addressed slot array with linear
//!     probing and tombstone deletion; capacity is chosen at construction
//!     and never changes.
//!   - Key modes as stored-key types (`u32` inline scalar, `&'k [u8]`
//!     borrow, `Box<[u8]>` owned copy) behind the `DirectTable`,
//!     `IndirectTable` and `OwnedTable` aliases.
//!   - `Cursor`/`Iter` and `walk`: pull- and push-style views over one
//!     slot-array traversal.
//!   - `List` and `Queue`: independent opaque-item sequences sharing the
//!     library's ownership conventions; the table does not use them.
//!
//! Constraints
//! - Fixed capacity: no resizing or rehashing; a probe path with no free
//!   slot reports `InsertError::CapacityExhausted` and leaves the table
//!   unchanged. Callers size tables up front; the prime presets
//!   `TINY_CAPACITY` through `LARGE_CAPACITY` limit probe clustering.
//! - Single-threaded: one logical owner at a time; cross-thread sharing
//!   must be serialized by the caller.
//! - Values are opaque: the table stores them, lends them out and returns
//!   them from `remove`, but never interprets or frees what they refer to.
//! - No partial mutation on any failing path: duplicate, full and
//!   allocation failures all leave state exactly as it was.
//!
//! Probing and deletion invariants
//! - A key's home slot is `hash % capacity`; collisions probe forward one
//!   slot at a time, wrapping, visiting at most `capacity` slots.
//! - Deletion tombstones the slot instead of emptying it, so every present
//!   key remains reachable from its home slot before any never-used slot.
//!   Lookup steps over tombstones; insertion reuses the first tombstone on
//!   its path once a live duplicate has been ruled out.
//! - Duplicate inserts are rejected (`InsertError::DuplicateKey`); update
//!   in place via `get_mut`.
//!
//! Enumeration
//! - `walk` drives a callback and stops at the first `ControlFlow::Break`;
//!   `cursor()` exposes the same traversal as an explicit
//!   init/valid/advance cursor; `iter()` adapts it to the standard
//!   `Iterator`. Order is slot-array order and unspecified.
//! - Structural modification during enumeration is impossible rather than
//!   undefined: every view holds a shared borrow of the table.
//!
//! Notes and non-goals
//! - No thread-safety, persistence or serialization.
//! - No key ordering beyond byte equality.
//! - The default hasher (`FxBuildHasher`) is deterministic; pass another
//!   `BuildHasher` via `with_capacity_and_hasher` if needed.

mod cursor;
mod key;
mod list;
mod queue;
mod table;
mod table_proptest;

// Public surface
pub use cursor::{Cursor, Iter};
pub use key::{DirectTable, IndirectTable, OwnedTable};
pub use list::List;
pub use queue::Queue;
pub use table::{
    AllocError, Entry, FixedTable, InsertError, LARGE_CAPACITY, MEDIUM_CAPACITY, SMALL_CAPACITY,
    TINY_CAPACITY,
};
