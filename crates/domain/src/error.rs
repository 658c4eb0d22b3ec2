//! Unified error types for the domain layer
//!
//! The geometry resolvers never fail: an absent result is ordinary control flow.
//! Errors only arise when building sizing policies from untrusted numbers or when
//! parsing names of presentation vocabulary.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., negative or non-finite dimensions)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside the allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if !value.is_finite() {
    ///     return Err(DomainError::validation("Modal size must be finite"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("size cannot be negative");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: size cannot be negative");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown transition: wobble");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("wobble"));
    }
}
