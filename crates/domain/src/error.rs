//! Unified error types for the domain layer
//!
//! Derivation itself never fails (every raw read has a default), so these
//! errors only surface from strict parsing of configuration tokens and
//! builder vocabulary.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside what the model accepts.
    ///
    /// # Example
    /// ```ignore
    /// if max_skills == 0 {
    ///     return Err(DomainError::validation("max_skills must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    /// - Unknown profile override tokens
    /// - Unknown ability keys
    /// - Unknown striking rune tiers
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("max_skills must be at least 1");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: max_skills must be at least 1"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown profile: wizardly");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown profile: wizardly");
    }
}
