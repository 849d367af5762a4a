//! Request DTOs for the operational API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for cache invalidation (POST /cache/invalidate)
///
/// # Fields
/// - `pattern`: Regex matched against cache keys; every matching entry is removed
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateRequest {
    /// The key pattern to invalidate
    pub pattern: String,
}

impl InvalidateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.pattern.is_empty() {
            return Some("Pattern cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_request_deserialize() {
        let json = r#"{"pattern": "^plan:3:"}"#;
        let req: InvalidateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.pattern, "^plan:3:");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_empty_pattern() {
        let req = InvalidateRequest {
            pattern: "".to_string(),
        };
        assert!(req.validate().is_some());
    }
}
