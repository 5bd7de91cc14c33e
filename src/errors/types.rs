//! Domain-specific error types for validation, commit-time constraints,
//! and credential handling.
//!
//! Validation errors are raised locally before the store is involved.
//! Constraint violations are reported by the persistence boundary when a
//! commit is rejected. Credential errors cover the write-only secret
//! contract and hashing failures.

use thiserror::Error;

/// Local validation errors
///
/// These are raised in memory, before any commit is attempted. An entity
/// that fails validation is never submitted to the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Instructions too short (minimum: {minimum} characters, actual: {actual})")]
    InstructionsTooShort { minimum: usize, actual: usize },
}

/// Constraint violations reported by the persistence boundary
///
/// Each variant carries the identifier of the schema rule that rejected
/// the commit, as reported by the store. The submitted entity remains
/// uncommitted when one of these is returned.
#[derive(Error, Debug)]
pub enum ConstraintViolation {
    #[error("Unique constraint failed: {constraint}")]
    Unique { constraint: String },

    #[error("Not-null constraint failed: {constraint}")]
    NotNull { constraint: String },

    #[error("Check constraint failed: {constraint}")]
    Check { constraint: String },

    #[error("Foreign key constraint failed: {constraint}")]
    ForeignKey { constraint: String },
}

/// Credential-related errors
///
/// The stored verifier is write-only. Reading it back is a programming
/// error and always yields [`CredentialError::ReadProtected`].
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Credentials are write-only and cannot be read back")]
    ReadProtected,

    #[error("No credential has been set for this account")]
    NotSet,

    #[error("Credential hashing failed: {message}")]
    Hash { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_validation_error_reports_both_lengths() {
        let error = ValidationError::InstructionsTooShort {
            minimum: 50,
            actual: 7,
        };
        let message = error.to_string();
        assert!(message.contains("minimum: 50"));
        assert!(message.contains("actual: 7"));
    }

    #[test]
    fn test_constraint_violation_names_the_constraint() {
        let error = ConstraintViolation::Unique {
            constraint: "accounts.username".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unique constraint failed: accounts.username"
        );
    }

    #[test]
    fn test_domain_error_bridges_are_transparent() {
        let error: DomainError = CredentialError::ReadProtected.into();
        assert_eq!(
            error.to_string(),
            "Credentials are write-only and cannot be read back"
        );

        let error: DomainError = ConstraintViolation::NotNull {
            constraint: "recipes.title".to_string(),
        }
        .into();
        assert!(matches!(error, DomainError::Constraint(_)));
    }
}
