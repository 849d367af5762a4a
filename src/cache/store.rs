//! Query Cache Module
//!
//! Bounded TTL cache for query results, combining HashMap storage with
//! explicit FIFO insertion-order tracking.

use std::collections::HashMap;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};
use crate::error::Result;

// == Query Cache ==
/// Main cache storage with FIFO eviction and per-entry TTL.
///
/// Keys are strings encoding a query's identity and parameters; values are
/// whatever the caller fetches. The cache never exceeds `max_entries` and a
/// read never returns an expired value.
#[derive(Debug)]
pub struct QueryCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// FIFO insertion-order tracker
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied when the caller does not specify one
    default_ttl: Duration,
}

impl<V: Clone> QueryCache<V> {
    // == Constructor ==
    /// Creates a new QueryCache with the given capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
        }
    }

    // == Get ==
    /// Returns the stored value if present and unexpired.
    ///
    /// Detecting an expired entry evicts it as a side effect, so expired
    /// entries stop counting toward the size immediately.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key` with the given TTL (default if `None`).
    ///
    /// Overwriting an existing key replaces the value and restarts the TTL
    /// but keeps the key's original insertion position. Inserting a new key
    /// into a full cache first evicts the oldest-inserted entry.
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>) {
        let is_new = !self.entries.contains_key(&key);

        if is_new && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.order.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted oldest cache entry");
            }
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        if is_new {
            self.order.record_insert(&key);
        }
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes one entry; returns whether it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        existed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns the count removed.
    ///
    /// Run periodically so cold, never-re-read entries do not hold memory
    /// until their key is next requested.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Invalidate Matching ==
    /// Removes every key matching the regex pattern; returns the count.
    ///
    /// Used when an underlying record changes and all derived cache keys for
    /// it must be dropped without knowing every exact key.
    pub fn invalidate_matching(&mut self, pattern: &str) -> Result<usize> {
        let regex = Regex::new(pattern)?;

        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| regex.is_match(key))
            .cloned()
            .collect();

        let count = matching.len();
        for key in matching {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        Ok(count)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
