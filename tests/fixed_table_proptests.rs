// FixedTable property tests (public API, direct key mode).
//
// Property: under any interleaving of insert/remove/get over a small key
// universe, a FixedTable agrees with a std HashMap model — presence, value,
// len, and the exact full/duplicate failure cases. Linear probing wraps
// across the whole slot array, so insert of a fresh key fails iff the table
// is saturated, which the model predicts as model.len == capacity.

use fixed_table::{DirectTable, InsertError};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn direct_table_matches_model(
        capacity in 1usize..=24,
        ops in proptest::collection::vec((0u8..=2u8, 0u32..32u32, any::<i64>()), 1..200)
    ) {
        let mut table: DirectTable<i64> = DirectTable::with_capacity(capacity);
        let mut model: HashMap<u32, i64> = HashMap::new();

        for (op, key, value) in ops {
            match op {
                // Insert: success, duplicate and saturation must all match
                // the model's prediction.
                0 => {
                    let res = table.insert(key, value);
                    if model.contains_key(&key) {
                        prop_assert_eq!(res, Err(InsertError::DuplicateKey));
                    } else if model.len() == capacity {
                        prop_assert_eq!(res, Err(InsertError::CapacityExhausted));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.insert(key, value);
                    }
                }
                // Remove: the returned pair is exactly what was stored.
                1 => {
                    let removed = table.remove(&key);
                    let expected = model.remove(&key).map(|v| (key, v));
                    prop_assert_eq!(removed, expected);
                }
                // Lookup parity.
                2 => {
                    prop_assert_eq!(table.get(&key), model.get(&key));
                    prop_assert_eq!(table.contains_key(&key), model.contains_key(&key));
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(table.len(), model.len());
        }

        // Final sweep: iteration yields the model's entries exactly.
        let mut seen: Vec<(u32, i64)> = table.iter().map(|e| (*e.key(), *e.value())).collect();
        let mut expected: Vec<(u32, i64)> = model.into_iter().collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}
