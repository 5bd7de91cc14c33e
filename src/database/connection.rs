//! Database connection pool management
//!
//! This module provides database connection pooling using SQLx with
//! SQLite. It implements pool configuration, schema setup, health
//! checks, and transaction handles for the persistence boundary.

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::errors::{DomainError, DomainResult};

/// Schema for the accounts table
///
/// The username must be present and unique. The credential verifier is
/// nullable: an account may exist before a credential is set.
const CREATE_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    username            TEXT NOT NULL UNIQUE,
    credential_verifier TEXT,
    image_url           TEXT,
    bio                 TEXT
)
"#;

/// Schema for the recipes table
///
/// The instructions rule is enforced here a second time, independent of
/// the in-memory guard. `length()` counts characters in SQLite, matching
/// the entity-level count. The CHECK is named so rejections identify it.
const CREATE_RECIPES: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    title               TEXT NOT NULL,
    instructions        TEXT NOT NULL
        CONSTRAINT instructions_min_length CHECK (length(instructions) >= 50),
    minutes_to_complete INTEGER,
    owner_id            INTEGER NOT NULL REFERENCES accounts(id)
)
"#;

/// Database connection pool wrapper
///
/// Manages the SQLite connection pool with configurable settings for
/// connection limits and timeouts. An in-memory database is private to
/// the connection that opened it, so in-memory pools are pinned to a
/// single connection that never expires.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, DomainError>` - Database pool or error
    ///
    /// # Example
    /// ```no_run
    /// use potluck_core::config::DatabaseConfig;
    /// use potluck_core::database::connection::DatabasePool;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("sqlite://potluck.db");
    ///     let pool = DatabasePool::new(config).await?;
    ///     pool.run_migrations().await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: DatabaseConfig) -> DomainResult<Self> {
        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        // Parse connection options from URL
        let mut connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DomainError::Configuration {
                message: format!("Invalid database URL: {}", e),
            })?
            .create_if_missing(true)
            // referential integrity is off by default in SQLite
            .foreign_keys(true);

        if !config.enable_logging {
            connect_options = connect_options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new()
            // Connection pool size
            .max_connections(config.max_connections)
            .min_connections(1)
            // Connection lifecycle
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            // Test connections before returning from pool
            .test_before_acquire(true);

        if config.is_in_memory() {
            // the database vanishes with its connection; keep exactly one
            // connection alive for the lifetime of the pool
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create database pool: {}", e);
                DomainError::Database {
                    message: e.to_string(),
                }
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool, config })
    }

    /// Create a private in-memory store with the schema applied
    ///
    /// Every call opens a fresh, isolated database. This is the unit of
    /// isolation for tests and short-lived scopes: nothing is shared
    /// between two in-memory pools.
    pub async fn in_memory() -> DomainResult<Self> {
        let pool = Self::new(DatabaseConfig::in_memory()).await?;
        pool.run_migrations().await?;
        Ok(pool)
    }

    /// Get a reference to the underlying SQLx pool
    ///
    /// Use this for executing queries and transactions.
    ///
    /// # Returns
    /// * `&SqlitePool` - Reference to the SQLx SQLite pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the configuration used to create this pool
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    ///
    /// # Returns
    /// * `Result<bool, DomainError>` - True if healthy, error otherwise
    ///
    /// # Example
    /// ```no_run
    /// use potluck_core::database::connection::DatabasePool;
    ///
    /// async fn check_health(pool: &DatabasePool) {
    ///     match pool.health_check().await {
    ///         Ok(true) => println!("Database is healthy"),
    ///         Ok(false) => println!("Database check returned false"),
    ///         Err(e) => println!("Database is unhealthy: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn health_check(&self) -> DomainResult<bool> {
        tracing::debug!("Performing database health check");

        // Execute a simple query to verify connectivity
        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                DomainError::Database {
                    message: e.to_string(),
                }
            })?;

        // Verify we got the expected result
        let value: i32 = sqlx::Row::try_get(&result, 0).unwrap_or(0);

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Get connection pool statistics
    ///
    /// Returns information about the current state of the connection pool.
    ///
    /// # Returns
    /// * `PoolStatistics` - Current pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown. Closing an
    /// in-memory pool discards the database.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    /// Apply the embedded schema
    ///
    /// Creates the accounts and recipes tables when missing. Safe to run
    /// more than once.
    ///
    /// # Returns
    /// * `Result<(), DomainError>` - Success or error
    pub async fn run_migrations(&self) -> DomainResult<()> {
        tracing::info!("Running database migrations");

        for statement in [CREATE_ACCOUNTS, CREATE_RECIPES] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Migration failed: {}", e);
                    DomainError::Database {
                        message: e.to_string(),
                    }
                })?;
        }

        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Begin a new database transaction
    ///
    /// # Returns
    /// * `Result<sqlx::Transaction<'_, Sqlite>, DomainError>` - Transaction handle
    pub async fn begin_transaction(
        &self,
    ) -> DomainResult<sqlx::Transaction<'_, sqlx::Sqlite>> {
        self.pool.begin().await.map_err(|e| DomainError::Database {
            message: e.to_string(),
        })
    }
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
