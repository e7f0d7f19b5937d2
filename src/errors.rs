//! Error types for catalog service operations.

/// Errors that can occur during catalog service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The operation referenced an id that does not exist in the collection.
    NotFound,
    /// A remote-mode HTTP request failed (network error or non-success status).
    Transport(String),
    /// JSON serialization or deserialization failed.
    Serialization(String),
    /// An internal service error occurred.
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Record not found"),
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Serialization(e.to_string())
    }
}

impl std::error::Error for ServiceError {}
