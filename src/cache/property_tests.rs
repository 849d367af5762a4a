//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache invariants over generated operation
//! sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::QueryCache;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 16;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d][0-9]{0,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The capacity bound holds after every mutating operation, not just at
    // the end of a sequence.
    #[test]
    fn prop_capacity_bound_always_holds(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value, None),
                CacheOp::Get { key } => {
                    let _ = cache.get(&key);
                }
                CacheOp::Remove { key } => {
                    let _ = cache.remove(&key);
                }
            }
            prop_assert!(cache.len() <= TEST_MAX_ENTRIES, "Capacity bound violated");
        }
    }

    // Storing a pair and reading it back before expiry returns the stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(key.clone(), value.clone(), None);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // After a remove, the key is absent.
    #[test]
    fn prop_remove_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(key.clone(), value, None);
        prop_assert!(cache.remove(&key));
        prop_assert_eq!(cache.get(&key), None);
    }

    // Storing V1 then V2 under the same key yields V2.
    #[test]
    fn prop_overwrite_semantics(key in key_strategy(), v1 in value_strategy(), v2 in value_strategy()) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        cache.set(key.clone(), v1, None);
        cache.set(key.clone(), v2.clone(), None);
        prop_assert_eq!(cache.get(&key), Some(v2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Inserting more distinct keys than the capacity keeps exactly the last
    // `max_entries` inserted keys; earlier insertions are evicted in order.
    #[test]
    fn prop_fifo_eviction_keeps_newest(count in TEST_MAX_ENTRIES + 1..TEST_MAX_ENTRIES * 3) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);

        let keys: Vec<String> = (0..count).map(|i| format!("key{i}")).collect();
        for (i, key) in keys.iter().enumerate() {
            cache.set(key.clone(), i, None);
        }

        prop_assert_eq!(cache.len(), TEST_MAX_ENTRIES);

        let survivors: HashSet<&String> = keys[count - TEST_MAX_ENTRIES..].iter().collect();
        for (i, key) in keys.iter().enumerate() {
            if survivors.contains(key) {
                prop_assert_eq!(cache.get(key), Some(i), "surviving key lost");
            } else {
                prop_assert_eq!(cache.get(key), None, "evicted key still present");
            }
        }
    }

    // Pattern invalidation removes exactly the matching subset.
    #[test]
    fn prop_pattern_invalidation_exactness(suffixes in prop::collection::hash_set("[0-9]{1,2}", 1..10)) {
        let mut cache = QueryCache::new(64, TEST_TTL);

        for suffix in &suffixes {
            cache.set(format!("plan:{suffix}"), "p".to_string(), None);
            cache.set(format!("crop:{suffix}"), "c".to_string(), None);
        }

        let removed = cache.invalidate_matching("^plan:").unwrap();
        prop_assert_eq!(removed, suffixes.len());

        for suffix in &suffixes {
            prop_assert_eq!(cache.get(&format!("plan:{suffix}")), None);
            prop_assert_eq!(cache.get(&format!("crop:{suffix}")), Some("c".to_string()));
        }
    }

    // Hit and miss counters track every read.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = QueryCache::new(TEST_MAX_ENTRIES, TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value, None),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Remove { key } => {
                    let _ = cache.remove(&key);
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }
}
