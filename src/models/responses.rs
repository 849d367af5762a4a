//! Response DTOs for the operational API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::db::PoolMetrics;

/// Response body for the liveness endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status string
    pub status: String,
    /// Service name
    pub service: String,
}

impl HealthResponse {
    /// Creates a healthy response
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// Response body for the database health endpoint (GET /health/database)
///
/// Composes the connection probe with pool metrics and derived warnings.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseHealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
    /// Connection probe outcome
    pub connection: ConnectionStatus,
    /// Pool gauges
    pub pool: PoolStatus,
    /// Query counters
    pub queries: QueryStatus,
    /// Threshold-based warnings, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Connection probe outcome
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    /// Whether the probe round-trip succeeded
    pub is_connected: bool,
    /// Probe duration in milliseconds
    pub response_time_ms: u64,
}

/// Pool connection gauges
#[derive(Debug, Clone, Serialize)]
pub struct PoolStatus {
    /// Connections currently allocated
    pub total_connections: u32,
    /// Connections not checked out
    pub idle_connections: usize,
    /// Connections checked out
    pub active_connections: u32,
    /// Acquisitions waiting for a free connection
    pub waiting_requests: usize,
    /// Checked-out fraction of the pool, as a whole percentage
    pub utilization_percentage: u32,
}

/// Query execution counters
#[derive(Debug, Clone, Serialize)]
pub struct QueryStatus {
    /// Successfully completed queries since creation or last reset
    pub total_executed: u64,
    /// Completion time of the most recent query, null if none yet
    pub last_query_time: Option<DateTime<Utc>>,
}

impl DatabaseHealthResponse {
    /// Warning thresholds: pool utilization above 80%, more than 5 waiting
    /// acquisitions, probe slower than one second.
    const UTILIZATION_WARN: f64 = 0.8;
    const WAITING_WARN: usize = 5;
    const RESPONSE_TIME_WARN_MS: u64 = 1000;

    /// Builds the health payload from a probe outcome and a metrics snapshot.
    pub fn new(is_connected: bool, response_time_ms: u64, metrics: &PoolMetrics) -> Self {
        let utilization = metrics.utilization();

        let mut warnings = Vec::new();
        if utilization > Self::UTILIZATION_WARN {
            warnings.push("High pool utilization (>80%)".to_string());
        }
        if metrics.waiting_requests > Self::WAITING_WARN {
            warnings.push(format!(
                "{} requests waiting for connection",
                metrics.waiting_requests
            ));
        }
        if response_time_ms > Self::RESPONSE_TIME_WARN_MS {
            warnings.push(format!(
                "Slow database response time: {}ms",
                response_time_ms
            ));
        }

        Self {
            status: if is_connected { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: Utc::now(),
            connection: ConnectionStatus {
                is_connected,
                response_time_ms,
            },
            pool: PoolStatus {
                total_connections: metrics.total_connections,
                idle_connections: metrics.idle_connections,
                active_connections: metrics.active_connections(),
                waiting_requests: metrics.waiting_requests,
                utilization_percentage: (utilization * 100.0).round() as u32,
            },
            queries: QueryStatus {
                total_executed: metrics.queries_executed,
                last_query_time: metrics.last_query_time,
            },
            warnings: (!warnings.is_empty()).then_some(warnings),
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for cache invalidation (POST /cache/invalidate)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Number of entries removed
    pub removed: usize,
    /// The pattern that was applied
    pub pattern: String,
}
