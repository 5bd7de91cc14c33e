//! SQLite implementation of the AccountRepository trait.
//!
//! This module provides the concrete implementation of account
//! persistence using SQLite with SQLx. The schema enforces the username
//! rules; commits that violate them come back as constraint violations
//! and leave the submitted entity uncommitted.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::database::sqlite::map_sqlx_error;
use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;

/// SQLite implementation of AccountRepository
pub struct SqliteAccountRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new SQLite account repository
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool from SQLx
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &SqliteRow) -> DomainResult<Account> {
        let mut account = Account::default();

        account.id = Some(row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?);
        account.username = row
            .try_get("username")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?;
        account.restore_credential(row.try_get("credential_verifier").map_err(|e| {
            DomainError::Database {
                message: format!("Failed to get credential_verifier: {}", e),
            }
        })?);
        account.image_url = row
            .try_get("image_url")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get image_url: {}", e),
            })?;
        account.bio = row.try_get("bio").map_err(|e| DomainError::Database {
            message: format!("Failed to get bio: {}", e),
        })?;

        Ok(account)
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, account: Account) -> DomainResult<Account> {
        let query = r#"
            INSERT INTO accounts (username, credential_verifier, image_url, bio)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(account.stored_credential())
            .bind(&account.image_url)
            .bind(&account.bio)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let mapped = map_sqlx_error(e);
                tracing::debug!("Account commit rejected: {}", mapped);
                mapped
            })?;

        // identity exists only after the store accepted the row
        let mut committed = account;
        committed.id = Some(result.last_insert_rowid());
        Ok(committed)
    }

    async fn update(&self, account: Account) -> DomainResult<Account> {
        let id = account.id.ok_or_else(|| DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        let query = r#"
            UPDATE accounts
            SET username = ?, credential_verifier = ?, image_url = ?, bio = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(account.stored_credential())
            .bind(&account.image_url)
            .bind(&account.bio)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let mapped = map_sqlx_error(e);
                tracing::debug!("Account update rejected: {}", mapped);
                mapped
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        let query = r#"
            SELECT id, username, credential_verifier, image_url, bio
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        let query = r#"
            SELECT id, username, credential_verifier, image_url, bio
            FROM accounts
            WHERE username = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts
                WHERE username = ?
            ) AS account_exists
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let exists: i64 = result
            .try_get("account_exists")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get existence result: {}", e),
            })?;

        Ok(exists == 1)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let query = "DELETE FROM accounts WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM accounts")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> DomainResult<u64> {
        let result = sqlx::query("SELECT COUNT(*) AS count FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let count: i64 = result.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }
}
