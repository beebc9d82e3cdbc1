//! Error types for repository operations.

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data validation failed before a storage operation.
    #[error("Data validation error: {0}")]
    ValidationError(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal/unexpected errors.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RepositoryError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Not-found error for a place id, with the canonical message.
    pub fn place_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Place not found: {}", id))
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// True for errors that should map to a 404 at the HTTP boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::internal(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::internal(s.to_string())
    }
}
