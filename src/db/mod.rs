//! Database Module
//!
//! Connection pool management for the Postgres store: single-flighted lazy
//! construction, typed query execution, operational metrics, and teardown.

mod manager;
mod metrics;
mod params;

// Re-export public types
pub use manager::{PoolHandle, PoolManager};
pub use metrics::PoolMetrics;
pub use params::SqlParam;
