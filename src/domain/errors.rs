//! # Domain Errors
//!
//! Error types for the domain layer.
//!
//! The failure surface is deliberately narrow: the only thing that can go
//! wrong is constructing a strategy input from bad data. Every operation
//! on an already-constructed value is total.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_input("weight must be non-negative");
//! assert_eq!(err.to_string(), "invalid input: weight must be non-negative");
//! ```

use thiserror::Error;

/// Domain layer error.
///
/// Raised only at value-object and strategy construction time. Once a
/// strategy instance exists, computing its cost or description cannot
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation failed at construction (negative weight or
    /// amount, empty destination, non-finite number).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Creates an [`DomainError::InvalidInput`] error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = DomainError::invalid_input("destination must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid input: destination must not be empty"
        );
    }

    #[test]
    fn invalid_input_equality() {
        let a = DomainError::invalid_input("boom");
        let b = DomainError::InvalidInput("boom".to_string());
        assert_eq!(a, b);
    }
}
