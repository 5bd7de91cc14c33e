//! Database module - SQLite implementations using SQLx
//!
//! This module provides the database access layer including:
//! - Connection pool management
//! - Embedded schema setup
//! - Repository pattern implementations
//! - Transaction support

pub mod connection;
pub mod sqlite;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sqlite::{SqliteAccountRepository, SqliteRecipeRepository};
