//! Error types for the accounts client library.

use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for all accounts client operations.
#[derive(Error, Debug)]
pub enum AccountsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The request was rejected client-side before being sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The accounts API returned a non-success status
    #[error("Accounts API error: {0}")]
    Api(ApiError),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AccountsError {
    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AccountsError::Api(error) => Some(error),
            _ => None,
        }
    }
}

/// An error returned by the accounts API itself.
///
/// The API reports failures as `{"error_message": "..."}` alongside a
/// non-2xx status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Message from the `error_message` field, or a fallback
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (HTTP {})", self.message, self.status)
    }
}

impl ApiError {
    /// Create a new API error from a status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Check if the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the request conflicts with the current state of the resource.
    ///
    /// The API answers 409 both for duplicate ids on create and for a stale
    /// version on delete.
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }

    /// Check if the server rejected the request payload.
    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    /// Check if the server failed to handle the request.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(404, "record 42 does not exist");
        assert_eq!(error.to_string(), "record 42 does not exist (HTTP 404)");
    }

    #[test]
    fn test_api_error_predicates() {
        assert!(ApiError::new(404, "").is_not_found());
        assert!(ApiError::new(409, "").is_conflict());
        assert!(ApiError::new(400, "").is_bad_request());
        assert!(ApiError::new(503, "").is_server_error());
        assert!(!ApiError::new(499, "").is_server_error());
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error: AccountsError = ValidationError::Country("GBR".to_string()).into();
        assert_eq!(error.to_string(), "Invalid Country [GBR]");
        assert!(error.api_error().is_none());
    }
}
