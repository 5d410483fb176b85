//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected before or by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The backend's raw message where one exists, the display form otherwise
    ///
    /// Used when surfacing persistence failures verbatim to the user.
    pub fn raw_message(&self) -> String {
        match self {
            ClientError::InvalidResponse(text)
            | ClientError::Forbidden(text)
            | ClientError::NotFound(text)
            | ClientError::Validation(text)
            | ClientError::Internal(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_unwraps_backend_text() {
        let err = ClientError::Internal("duplicate key value".to_string());
        assert_eq!(err.raw_message(), "duplicate key value");

        let err = ClientError::Validation("invalid input syntax".to_string());
        assert_eq!(err.raw_message(), "invalid input syntax");
    }

    #[test]
    fn test_raw_message_falls_back_to_display() {
        assert_eq!(
            ClientError::Unauthorized.raw_message(),
            "Authentication required"
        );
    }
}
