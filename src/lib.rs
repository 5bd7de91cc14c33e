//! # Potluck Core
//!
//! Domain model and persistence layer for the Potluck recipe-sharing
//! backend. This crate contains the Account and Recipe entities, the
//! credential hashing value objects, repository interfaces with their
//! SQLite implementations, and the error types shared across the
//! persistence boundary.
//!
//! Credentials are write-only: an account stores a salted bcrypt
//! verifier, answers verification queries, and refuses read access to
//! the stored secret. Recipe content rules are enforced twice, once in
//! memory before a commit is attempted and once by the store's schema.

pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod repositories;

// Re-export commonly used types for convenience
pub use config::{CredentialConfig, DatabaseConfig};
pub use database::*;
pub use domain::*;
pub use errors::*;
pub use repositories::*;
