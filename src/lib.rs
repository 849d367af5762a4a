//! Agridata - data-access core for a farm-planning application
//!
//! Provides a single-flighted Postgres connection pool with operational
//! metrics, and a bounded TTL query cache with FIFO eviction and
//! pattern-based invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{QueryCache, SharedQueryCache};
pub use config::{Config, PoolConfig};
pub use db::{PoolHandle, PoolManager, PoolMetrics, SqlParam};
pub use error::{DataError, Result};
pub use tasks::spawn_cleanup_task;
