//! FixedTable: the open-addressed slot array, probe loop and mutation paths.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::ops::ControlFlow;
use rustc_hash::FxBuildHasher;

use crate::cursor::{Cursor, Iter};

/// Preset capacity for very small tables (prime).
pub const TINY_CAPACITY: usize = 127;
/// Preset capacity for small tables (prime).
pub const SMALL_CAPACITY: usize = 1021;
/// Preset capacity for medium tables (prime).
pub const MEDIUM_CAPACITY: usize = 8191;
/// Preset capacity for large tables (prime).
pub const LARGE_CAPACITY: usize = 65521;

/// One slot of the probe array.
///
/// `Tombstone` marks a previously occupied, now deleted slot. Lookup probing
/// steps over it; insertion may reuse it once the probe has ruled out a live
/// duplicate further along the sequence.
#[derive(Debug)]
pub(crate) enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied(Entry<K, V>),
}

/// An occupied (key, value) pair. Returned by [`FixedTable::find`] and both
/// enumeration forms, so callers can inspect the key alongside the value and
/// can tell "entry whose value is `None`" apart from "no entry".
#[derive(Debug)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Insertion failure. The table is unchanged in either case.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// An occupied slot already holds an equal key. Duplicate inserts are
    /// rejected; use [`FixedTable::get_mut`] to update a value in place.
    DuplicateKey,
    /// The probe sequence visited every slot without finding a free one.
    /// Retrying cannot succeed; this signals an undersized table.
    CapacityExhausted,
}

impl core::fmt::Display for InsertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InsertError::DuplicateKey => f.write_str("key already present"),
            InsertError::CapacityExhausted => f.write_str("table is full"),
        }
    }
}

impl std::error::Error for InsertError {}

/// The slot array could not be allocated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("slot array allocation failed")
    }
}

impl std::error::Error for AllocError {}

/// A fixed-capacity open-addressed hash table.
///
/// The slot array is allocated once at construction and never resized; when
/// no free slot remains on a key's probe path, [`insert`](Self::insert)
/// reports [`InsertError::CapacityExhausted`] instead of growing. Size
/// tables generously; the [`TINY_CAPACITY`]..[`LARGE_CAPACITY`] presets are
/// primes chosen to limit probe clustering.
///
/// Probing is linear: a key's home slot is `hash % capacity` and collisions
/// walk forward one slot at a time, wrapping, visiting at most `capacity`
/// slots. The default hasher is `FxBuildHasher`, which is deterministic, so
/// a given insertion sequence probes identically across runs. Iteration
/// order is still unspecified: it is slot-array order, which shifts with
/// insertion order and capacity.
///
/// Key ownership is decided by the stored key type; see the crate-level
/// docs and the [`DirectTable`](crate::DirectTable),
/// [`IndirectTable`](crate::IndirectTable) and
/// [`OwnedTable`](crate::OwnedTable) aliases.
pub struct FixedTable<K, V, S = FxBuildHasher> {
    hasher: S,
    slots: Box<[Slot<K, V>]>,
    len: usize,
}

impl<K, V> FixedTable<K, V>
where
    K: Eq + Hash,
{
    /// Create a table with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the slot array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }

    /// Like [`with_capacity`](Self::with_capacity), but surfaces allocation
    /// failure instead of panicking. Still panics on zero capacity.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::try_with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> FixedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a table with exactly `capacity` slots and a caller-supplied
    /// hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or the slot array cannot be allocated.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        match Self::try_with_capacity_and_hasher(capacity, hasher) {
            Ok(table) => table,
            Err(AllocError) => panic!("failed to allocate {capacity} table slots"),
        }
    }

    /// Fallible constructor; no partial state is left behind on failure.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn try_with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self, AllocError> {
        assert!(capacity > 0, "capacity must be positive");
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| AllocError)?;
        slots.extend((0..capacity).map(|_| Slot::Empty));
        Ok(Self {
            hasher,
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed slot count chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn home(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    /// Index of the occupied slot holding `key`, walking the probe sequence
    /// from the home slot. Tombstones are stepped over; the first `Empty`
    /// slot terminates the search.
    fn probe_occupied<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.len();
        let mut idx = self.home(self.hasher.hash_one(key));
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.key.borrow() == key => return Some(idx),
                _ => {}
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }
        None
    }

    /// Look up `key`, returning the full entry if present.
    ///
    /// Accepts any borrowed form of the stored key, so an
    /// [`OwnedTable`](crate::OwnedTable) is queried with `&[u8]` without
    /// allocating. Never mutates the table.
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.probe_occupied(key)?;
        match &self.slots[idx] {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Shorthand for [`find`](Self::find) that projects out the value.
    ///
    /// When `V` is itself an `Option`, a present-but-`None` value is
    /// indistinguishable here from an absent key; use `find` for that case.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).map(|entry| &entry.value)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.probe_occupied(key)?;
        match &mut self.slots[idx] {
            Slot::Occupied(entry) => Some(&mut entry.value),
            _ => None,
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.probe_occupied(key).is_some()
    }

    /// Insert a (key, value) pair.
    ///
    /// The key is converted into the stored key type inside the call: for an
    /// [`OwnedTable`](crate::OwnedTable) this is where the caller's bytes
    /// are copied into table-owned storage, so the caller's buffer may be
    /// mutated or freed afterwards without affecting lookups.
    ///
    /// A key equal to one already present is rejected with
    /// [`InsertError::DuplicateKey`]; a table with no free slot left on the
    /// probe path reports [`InsertError::CapacityExhausted`]. Either way the
    /// table is unchanged.
    pub fn insert(&mut self, key: impl Into<K>, value: V) -> Result<(), InsertError> {
        let key = key.into();
        let capacity = self.slots.len();
        let mut idx = self.home(self.hasher.hash_one(&key));
        // First tombstone seen on the probe path; reusable once the rest of
        // the path has ruled out a live duplicate.
        let mut reusable = None;
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => {
                    let at = reusable.unwrap_or(idx);
                    self.slots[at] = Slot::Occupied(Entry { key, value });
                    self.len += 1;
                    return Ok(());
                }
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(idx);
                    }
                }
                Slot::Occupied(entry) if entry.key == key => {
                    return Err(InsertError::DuplicateKey);
                }
                Slot::Occupied(_) => {}
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }
        match reusable {
            Some(at) => {
                self.slots[at] = Slot::Occupied(Entry { key, value });
                self.len += 1;
                Ok(())
            }
            None => Err(InsertError::CapacityExhausted),
        }
    }

    /// Remove the entry stored under `key`, handing its key and value back
    /// to the caller.
    ///
    /// The slot becomes a tombstone rather than `Empty`, keeping the probe
    /// paths of colliding keys intact. Dropping the returned pair releases a
    /// table-owned key copy; borrowed and scalar keys, and whatever the
    /// value refers to, are untouched either way.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.probe_occupied(key)?;
        let Slot::Occupied(entry) = core::mem::replace(&mut self.slots[idx], Slot::Tombstone)
        else {
            return None;
        };
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Visit every occupied entry in slot-array order.
    ///
    /// A visitor returning `ControlFlow::Break(b)` stops enumeration at that
    /// entry; `walk` then returns `Some(b)` and later entries are not
    /// visited. Visiting everything returns `None`. Structural modification
    /// during the walk is ruled out by the shared borrow on the table.
    pub fn walk<B, F>(&self, mut visitor: F) -> Option<B>
    where
        F: FnMut(&Entry<K, V>) -> ControlFlow<B>,
    {
        for slot in self.slots.iter() {
            if let Slot::Occupied(entry) = slot {
                if let ControlFlow::Break(out) = visitor(entry) {
                    return Some(out);
                }
            }
        }
        None
    }

    /// Pull-style counterpart to [`walk`](Self::walk): an explicit cursor
    /// positioned on the first occupied entry, with
    /// [`valid`](Cursor::valid) / [`entry`](Cursor::entry) /
    /// [`advance`](Cursor::advance) operations.
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.slots)
    }

    /// Standard iterator over occupied entries; the same traversal as
    /// [`cursor`](Self::cursor) behind the `Iterator` trait.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.cursor())
    }
}

impl<'a, K, V, S> IntoIterator for &'a FixedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> core::fmt::Debug for FixedTable<K, V, S>
where
    K: Eq + Hash + core::fmt::Debug,
    V: core::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

#[cfg(test)]
impl<K, V, S> FixedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Check the reachability invariant: every occupied slot must be found
    /// by probing from its key's home slot before any `Empty` slot.
    pub(crate) fn assert_probe_invariant(&self) {
        let mut occupied = 0;
        for slot in self.slots.iter() {
            if let Slot::Occupied(entry) = slot {
                occupied += 1;
                assert!(
                    self.probe_occupied(&entry.key).is_some(),
                    "occupied slot unreachable from its home slot"
                );
            }
        }
        assert_eq!(occupied, self.len, "len out of sync with occupied slots");
    }
}
