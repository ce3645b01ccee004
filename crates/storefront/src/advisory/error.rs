//! Error types for the advisory backend client.
//!
//! These never escape the advisory module boundary; they exist so the
//! client can log what happened before substituting the fallback value.

use thiserror::Error;

/// Errors that can occur when interacting with the advisory backend.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Error status from the API (e.g., `RESOURCE_EXHAUSTED`).
        status: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the backend.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response envelope.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Numeric HTTP-style code.
    #[serde(default)]
    pub code: i64,
    /// Error message.
    pub message: String,
    /// Machine-readable status string.
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_error_display() {
        let err = AdvisoryError::RateLimited(60);
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = AdvisoryError::Api {
            status: "INVALID_ARGUMENT".to_string(),
            message: "contents must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (INVALID_ARGUMENT): contents must not be empty"
        );
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.code, 429);
        assert_eq!(response.error.status, "RESOURCE_EXHAUSTED");
    }

    #[test]
    fn test_api_error_deserialization_without_status() {
        let json = r#"{"error": {"message": "boom"}}"#;
        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.message, "boom");
        assert!(response.error.status.is_empty());
    }
}
