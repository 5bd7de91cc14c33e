//! SQLite implementations of the repository traits.

pub mod account_repository;
pub mod recipe_repository;

pub use account_repository::SqliteAccountRepository;
pub use recipe_repository::SqliteRecipeRepository;

use sqlx::error::ErrorKind;

use crate::errors::{ConstraintViolation, DomainError};

/// Translate a SQLx error into the domain error taxonomy
///
/// Constraint failures keep their kind and the identifier of the schema
/// rule that rejected the commit; everything else becomes a generic
/// database error.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db) => {
            let constraint = constraint_name(db.message());
            match db.kind() {
                ErrorKind::UniqueViolation => ConstraintViolation::Unique { constraint }.into(),
                ErrorKind::NotNullViolation => ConstraintViolation::NotNull { constraint }.into(),
                ErrorKind::CheckViolation => ConstraintViolation::Check { constraint }.into(),
                ErrorKind::ForeignKeyViolation => {
                    ConstraintViolation::ForeignKey { constraint }.into()
                }
                _ => DomainError::Database {
                    message: db.message().to_string(),
                },
            }
        }
        _ => DomainError::Database {
            message: error.to_string(),
        },
    }
}

/// Extract the constraint identifier from a SQLite error message
///
/// SQLite reports constraint failures as, for example,
/// `UNIQUE constraint failed: accounts.username` or
/// `CHECK constraint failed: instructions_min_length`. The part after
/// the colon names the constraint. Foreign key failures carry no name
/// and pass through whole.
fn constraint_name(message: &str) -> String {
    message
        .split_once(": ")
        .map(|(_, name)| name)
        .unwrap_or(message)
        .to_string()
}
