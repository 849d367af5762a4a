//! Pool Metrics Module
//!
//! Snapshot of connection pool health, readable before any pool exists.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Pool Metrics ==
/// Point-in-time view of connection pool state and query counters.
///
/// Connection gauges reflect live pool state; the query counters accumulate
/// until explicitly reset. `last_query_time` is `None` until the first
/// successful query completes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolMetrics {
    /// Connections currently allocated by the pool
    pub total_connections: u32,
    /// Connections not currently checked out
    pub idle_connections: usize,
    /// Acquisition calls queued waiting for a free connection
    pub waiting_requests: usize,
    /// Successfully completed queries since creation or last reset
    pub queries_executed: u64,
    /// Completion time of the most recent successful query
    pub last_query_time: Option<DateTime<Utc>>,
}

impl PoolMetrics {
    /// Connections currently checked out.
    pub fn active_connections(&self) -> u32 {
        self.total_connections
            .saturating_sub(self.idle_connections as u32)
    }

    /// Fraction of the pool currently checked out, 0.0 when the pool is empty.
    pub fn utilization(&self) -> f64 {
        if self.total_connections == 0 {
            0.0
        } else {
            f64::from(self.active_connections()) / f64::from(self.total_connections)
        }
    }
}
