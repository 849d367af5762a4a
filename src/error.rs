//! Error types for the data-access core
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Data Error Enum ==
/// Unified error type for the data-access core.
#[derive(Error, Debug)]
pub enum DataError {
    /// Database connection string missing or invalid
    #[error("database not configured: {0}")]
    Config(String),

    /// Error from the underlying Postgres driver, propagated unwrapped
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Invalid regex supplied for cache-key invalidation
    #[error("invalid cache key pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid request data at the HTTP edge
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DataError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            DataError::Database(err) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
            DataError::Pattern(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DataError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data-access core.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (
                DataError::Config("DATABASE_URL not set".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DataError::Database(sqlx::Error::PoolClosed),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DataError::Pattern(regex::Regex::new("plan:(").unwrap_err()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DataError::InvalidRequest("pattern cannot be empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_database_error_message_unwrapped() {
        // Transparent variant must surface the driver's own message
        let err = DataError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
