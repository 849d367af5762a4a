//! Cache Module
//!
//! In-memory query-result caching with TTL expiration, FIFO eviction, and
//! pattern-based invalidation.

mod entry;
mod fifo;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use fifo::InsertionOrder;
pub use shared::SharedQueryCache;
pub use stats::CacheStats;
pub use store::QueryCache;
