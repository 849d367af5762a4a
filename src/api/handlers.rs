//! API Handlers
//!
//! HTTP request handlers for the operational endpoints. These are
//! collaborators of the core: all derivation (utilization, warnings) happens
//! here, never inside the pool manager or cache.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::config::Config;
use crate::cache::SharedQueryCache;
use crate::db::PoolManager;
use crate::error::{DataError, Result};
use crate::models::{
    CacheStatsResponse, DatabaseHealthResponse, HealthResponse, InvalidateRequest,
    InvalidateResponse,
};

/// Application state shared across all handlers.
///
/// Repositories and route handlers in the wider application share the same
/// two entry points: the pool manager for queries and the cache for wrapping
/// them.
#[derive(Clone)]
pub struct AppState {
    /// Shared connection pool manager
    pub db: Arc<PoolManager>,
    /// Shared query-result cache
    pub cache: SharedQueryCache<Value>,
}

impl AppState {
    /// Creates a new AppState from its two components.
    pub fn new(db: PoolManager, cache: SharedQueryCache<Value>) -> Self {
        Self {
            db: Arc::new(db),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let db = PoolManager::new(config.pool.clone());
        let cache = SharedQueryCache::new(config.cache_max_entries, config.cache_default_ttl());
        Self::new(db, cache)
    }
}

/// Handler for GET /health
///
/// Process liveness only; says nothing about the database.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /health/database
///
/// Probes the database, reads pool metrics, and derives the status payload.
/// Responds 503 when the probe fails so load balancers can act on it.
pub async fn database_health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<DatabaseHealthResponse>) {
    let started = Instant::now();
    let is_connected = state.db.test_connection().await;
    let response_time_ms = started.elapsed().as_millis() as u64;

    let metrics = state.db.metrics();
    let response = DatabaseHealthResponse::new(is_connected, response_time_ms, &metrics);

    let status = if is_connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.cache.stats().await;
    Json(CacheStatsResponse::from(stats))
}

/// Handler for POST /cache/invalidate
///
/// Removes every cache entry whose key matches the request pattern.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(DataError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate_matching(&req.pattern).await?;
    Ok(Json(InvalidateResponse {
        removed,
        pattern: req.pattern,
    }))
}
