//! Configuration module with persistence-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `credential` - Credential hashing parameters
//! - `database` - Database connection and pool configuration

pub mod credential;
pub mod database;

// Re-export commonly used types
pub use credential::CredentialConfig;
pub use database::DatabaseConfig;
