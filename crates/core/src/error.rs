//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised before any state is touched: an operation that
/// returns an error has left its receiver exactly as it found it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was missing or violated a structural precondition
    /// (length, capacity, width budget, unknown handle).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An article width was rejected by its setter.
    #[error("invalid width: {0}")]
    InvalidWidth(String),

    /// An article number was rejected by its setter.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A stock temperature was outside the configured range.
    #[error("invalid temperature: {0}")]
    InvalidTemperature(String),

    /// Adding storage locations would exceed the stock's capacity.
    #[error("too many storage locations (limit: {limit})")]
    TooManyStorageLocations { limit: usize },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_width(msg: impl Into<String>) -> Self {
        Self::InvalidWidth(msg.into())
    }

    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn invalid_temperature(msg: impl Into<String>) -> Self {
        Self::InvalidTemperature(msg.into())
    }

    pub fn too_many_storage_locations(limit: usize) -> Self {
        Self::TooManyStorageLocations { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::invalid_argument("article number too long");
        assert_eq!(err.to_string(), "invalid argument: article number too long");

        let err = DomainError::too_many_storage_locations(3);
        assert_eq!(err.to_string(), "too many storage locations (limit: 3)");
    }
}
