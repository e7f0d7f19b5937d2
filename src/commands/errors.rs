//! # Command Error Handling
//!
//! This module provides error handling utilities for catalogoctl commands
//! using the handled crate for consistent error property extraction.

use handled::Handle;

use crate::ServiceError;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Implements Handle<UserError> for itself to allow extraction
impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

/// Implement Handle<UserError> for ServiceError
impl Handle<UserError> for ServiceError {
    fn handle(&self) -> Option<UserError> {
        let (message, hint) = match self {
            ServiceError::NotFound => (
                "No record with that id".to_string(),
                Some("Use '<catalog> list' to see the ids currently in the collection".to_string()),
            ),
            ServiceError::Transport(detail) => (
                format!("API request failed: {}", detail),
                Some("Check that the API server is reachable, or run with --mock".to_string()),
            ),
            ServiceError::Serialization(detail) => (format!("Malformed response: {}", detail), None),
            ServiceError::Internal(detail) => (detail.clone(), None),
        };
        Some(UserError {
            message,
            usage_hint: hint,
        })
    }
}

/// Implement Handle<UserError> for serde_json::Error
impl Handle<UserError> for serde_json::Error {
    fn handle(&self) -> Option<UserError> {
        Some(UserError {
            message: format!("JSON parsing error: {}", self),
            usage_hint: Some(
                "Pass the record as a JSON object, e.g. '{\"nombre\": \"X\", \"estadoId\": \"1\"}'"
                    .to_string(),
            ),
        })
    }
}
