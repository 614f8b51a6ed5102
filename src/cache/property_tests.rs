//! Property-Based Tests for the LFU Engine
//!
//! Uses proptest to verify the structural invariants under arbitrary
//! operation sequences.

use proptest::prelude::*;

use crate::cache::LfuStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 8;

// == Strategies ==
/// Keys drawn from a small range so sequences collide often
fn key_strategy() -> impl Strategy<Value = i64> {
    0..20i64
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: i64, value: String },
    Get { key: i64 },
    Remove { key: i64 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of puts, the store never holds more than
    // `capacity` live keys and the four structures stay consistent.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..60)
    ) {
        let mut store = LfuStore::new(TEST_CAPACITY);

        for (key, value) in entries {
            store.put(key, value);
            prop_assert!(store.len() <= TEST_CAPACITY, "Capacity exceeded");
            store.assert_consistent();
        }
    }

    // Storing then retrieving a key (small enough sequence that nothing
    // was evicted) returns the stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = LfuStore::new(TEST_CAPACITY);

        store.put(key, value.clone());
        prop_assert_eq!(store.get(key), Some(value));
    }

    // Overwriting a key keeps a single entry holding the newer value and
    // never counts as an eviction.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = LfuStore::new(TEST_CAPACITY);

        store.put(key, value1);
        store.put(key, value2.clone());

        prop_assert_eq!(store.get(key), Some(value2));
        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.eviction_count(), 0);
    }

    // Distinct-key inserts evict exactly the overflow beyond capacity.
    #[test]
    fn prop_eviction_count_matches_overflow(extra in 0..30usize) {
        let mut store = LfuStore::new(TEST_CAPACITY);
        let total = TEST_CAPACITY + extra;

        for key in 0..total as i64 {
            store.put(key + 1000, "v".to_string()); // outside key_strategy range
        }

        prop_assert_eq!(store.eviction_count(), extra as u64);
        prop_assert_eq!(store.len(), TEST_CAPACITY.min(total));
    }

    // Under arbitrary operation sequences the structures stay mutually
    // consistent and the eviction counter never decreases.
    #[test]
    fn prop_mixed_ops_stay_consistent(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store = LfuStore::new(TEST_CAPACITY);
        let mut last_evictions = 0u64;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => {
                    let _ = store.get(key);
                }
                CacheOp::Remove { key } => {
                    let _ = store.remove(key);
                }
                CacheOp::Clear => {
                    store.clear();
                    last_evictions = 0;
                }
            }

            store.assert_consistent();
            prop_assert!(store.len() <= TEST_CAPACITY);
            let evictions = store.eviction_count();
            prop_assert!(evictions >= last_evictions, "Eviction counter went backwards");
            last_evictions = evictions;
        }
    }

    // A zero-capacity store misses on every get, no matter the sequence.
    #[test]
    fn prop_zero_capacity_always_misses(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let mut store = LfuStore::new(0);

        for (key, value) in entries {
            store.put(key, value);
            prop_assert_eq!(store.get(key), None);
            prop_assert_eq!(store.len(), 0);
        }
    }
}
