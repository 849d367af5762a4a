//! API Module
//!
//! HTTP handlers and routing for the operational endpoints.
//!
//! # Endpoints
//! - `GET /health` - Process liveness
//! - `GET /health/database` - Database probe with pool metrics
//! - `GET /cache/stats` - Cache statistics
//! - `POST /cache/invalidate` - Pattern-based cache invalidation

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
