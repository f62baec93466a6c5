#![cfg(test)]

// Property tests for FixedTable kept inside the crate so they can check the
// internal probe-reachability invariant alongside the public contract.
//
// Model: std HashMap. Because linear probing wraps across the whole slot
// array, an insert of a fresh key fails iff every slot is occupied, so the
// model predicts CapacityExhausted exactly (model.len == capacity).

use crate::table::{FixedTable, InsertError};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Walk,
    Cursor,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (
        3usize..=16,
        proptest::collection::vec("[a-z]{0,6}", 1..=10),
    )
        .prop_flat_map(|(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                idx.clone().prop_map(OpI::Remove),
                idx.clone().prop_map(OpI::Get),
                idx.prop_map(OpI::Contains),
                Just(OpI::Walk),
                Just(OpI::Cursor),
            ];
            (
                Just(capacity),
                Just(pool),
                proptest::collection::vec(op, 1..64),
            )
        })
}

proptest! {
    #[test]
    fn owned_table_matches_model((capacity, pool, ops) in arb_scenario()) {
        let mut table: FixedTable<Box<[u8]>, i32> = FixedTable::with_capacity(capacity);
        let mut model: HashMap<Vec<u8>, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let key = pool[i].as_bytes();
                    let res = table.insert(key, v);
                    if model.contains_key(key) {
                        prop_assert_eq!(res, Err(InsertError::DuplicateKey));
                    } else if model.len() == capacity {
                        prop_assert_eq!(res, Err(InsertError::CapacityExhausted));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.insert(key.to_vec(), v);
                    }
                }
                OpI::Remove(i) => {
                    let key = pool[i].as_bytes();
                    let removed = table.remove(key);
                    let expected = model.remove(key);
                    match (removed, expected) {
                        (Some((k, v)), Some(ev)) => {
                            prop_assert_eq!(&k[..], key);
                            prop_assert_eq!(v, ev);
                        }
                        (None, None) => {}
                        other => prop_assert!(false, "remove mismatch: {:?}", other),
                    }
                }
                OpI::Get(i) => {
                    let key = pool[i].as_bytes();
                    prop_assert_eq!(table.get(key), model.get(key));
                }
                OpI::Contains(i) => {
                    let key = pool[i].as_bytes();
                    prop_assert_eq!(table.contains_key(key), model.contains_key(key));
                }
                OpI::Walk => {
                    let mut visited = 0usize;
                    let mut mismatched = false;
                    let stopped: Option<()> = table.walk(|entry| {
                        visited += 1;
                        if model.get(&entry.key()[..]) != Some(entry.value()) {
                            mismatched = true;
                        }
                        core::ops::ControlFlow::Continue(())
                    });
                    prop_assert!(!mismatched, "walk surfaced an entry not in the model");
                    prop_assert_eq!(stopped, None);
                    prop_assert_eq!(visited, model.len());
                }
                OpI::Cursor => {
                    let mut visited = 0usize;
                    let mut cur = table.cursor();
                    while let Some(entry) = cur.entry() {
                        prop_assert_eq!(model.get(&entry.key()[..]), Some(entry.value()));
                        visited += 1;
                        cur.advance();
                    }
                    prop_assert!(!cur.valid());
                    prop_assert_eq!(visited, model.len());
                }
            }

            // Structural invariants after every step.
            prop_assert_eq!(table.len(), model.len());
            prop_assert_eq!(table.is_empty(), model.is_empty());
            prop_assert_eq!(table.capacity(), capacity);
            table.assert_probe_invariant();
        }

        // Final sweep: the iterator yields exactly the model's entries.
        let mut seen: Vec<(Vec<u8>, i32)> = table
            .iter()
            .map(|e| (e.key().to_vec(), *e.value()))
            .collect();
        let mut expected: Vec<(Vec<u8>, i32)> =
            model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        seen.sort();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}
