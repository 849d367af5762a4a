//! Shared Cache Module
//!
//! Thread-safe wrapper around [`QueryCache`] plus the `with_cache` helper
//! that turns a cache miss into one fetcher invocation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, QueryCache};
use crate::error::Result;

// == Shared Query Cache ==
/// Clone-able handle to a cache shared across tasks.
///
/// All plain operations take the lock briefly and never suspend while holding
/// it; `with_cache` releases the lock across its fetcher.
#[derive(Debug)]
pub struct SharedQueryCache<V> {
    inner: Arc<RwLock<QueryCache<V>>>,
}

impl<V> Clone for SharedQueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedQueryCache<V> {
    // == Constructor ==
    /// Creates a shared cache with the given capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(QueryCache::new(max_entries, default_ttl))),
        }
    }

    // == With Cache ==
    /// Returns the cached value for `key`, or runs `fetcher` once and caches
    /// its result.
    ///
    /// On a hit the fetcher is never invoked. On a miss the fetcher runs with
    /// the lock released; its resolved value is stored under `key` with `ttl`
    /// (default if `None`) and returned. A fetcher error propagates to the
    /// caller and leaves the cache untouched for that key.
    pub async fn with_cache<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetcher: F,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(value) = self.inner.write().await.get(key) {
            return Ok(value);
        }

        let value = fetcher().await?;
        self.inner
            .write()
            .await
            .set(key.to_string(), value.clone(), ttl);
        Ok(value)
    }

    // == Get ==
    /// Returns the stored value if present and unexpired.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.write().await.get(key)
    }

    // == Set ==
    /// Stores a value under `key` with the given TTL (default if `None`).
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        self.inner.write().await.set(key.into(), value, ttl);
    }

    // == Remove ==
    /// Removes one entry; returns whether it existed.
    pub async fn remove(&self, key: &str) -> bool {
        self.inner.write().await.remove(key)
    }

    // == Clear ==
    /// Removes all entries.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns the count removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    // == Invalidate Matching ==
    /// Removes every key matching the regex pattern; returns the count.
    pub async fn invalidate_matching(&self, pattern: &str) -> Result<usize> {
        self.inner.write().await.invalidate_matching(pattern)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
