//! SQLite implementation of the RecipeRepository trait.
//!
//! Commits pass through the schema's second layer of recipe rules: the
//! NOT NULL columns, the named CHECK on instructions length, and the
//! foreign key to the owning account.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::database::sqlite::map_sqlx_error;
use crate::domain::entities::recipe::Recipe;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RecipeRepository;

const INSERT_RECIPE: &str = r#"
    INSERT INTO recipes (title, instructions, minutes_to_complete, owner_id)
    VALUES (?, ?, ?, ?)
"#;

const SELECT_RECIPE: &str = r#"
    SELECT id, title, instructions, minutes_to_complete, owner_id
    FROM recipes
"#;

/// SQLite implementation of RecipeRepository
pub struct SqliteRecipeRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    /// Create a new SQLite recipe repository
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool from SQLx
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert database row to Recipe entity
    fn row_to_recipe(row: &SqliteRow) -> DomainResult<Recipe> {
        let mut recipe = Recipe::default();

        recipe.id = Some(row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?);
        recipe.title = row.try_get("title").map_err(|e| DomainError::Database {
            message: format!("Failed to get title: {}", e),
        })?;
        recipe.restore_instructions(row.try_get("instructions").map_err(|e| {
            DomainError::Database {
                message: format!("Failed to get instructions: {}", e),
            }
        })?);

        let minutes: Option<i64> =
            row.try_get("minutes_to_complete")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get minutes_to_complete: {}", e),
                })?;
        recipe.minutes_to_complete = match minutes {
            Some(value) => Some(u32::try_from(value).map_err(|_| DomainError::Database {
                message: format!("minutes_to_complete out of range: {}", value),
            })?),
            None => None,
        };

        recipe.owner_id = row.try_get("owner_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get owner_id: {}", e),
        })?;

        Ok(recipe)
    }
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn create(&self, recipe: Recipe) -> DomainResult<Recipe> {
        let result = sqlx::query(INSERT_RECIPE)
            .bind(&recipe.title)
            .bind(recipe.instructions())
            .bind(recipe.minutes_to_complete.map(i64::from))
            .bind(recipe.owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let mapped = map_sqlx_error(e);
                tracing::debug!("Recipe commit rejected: {}", mapped);
                mapped
            })?;

        let mut committed = recipe;
        committed.id = Some(result.last_insert_rowid());
        Ok(committed)
    }

    async fn create_many(&self, recipes: Vec<Recipe>) -> DomainResult<Vec<Recipe>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let mut committed = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            // a rejected row drops the transaction and rolls back the
            // whole batch
            let result = sqlx::query(INSERT_RECIPE)
                .bind(&recipe.title)
                .bind(recipe.instructions())
                .bind(recipe.minutes_to_complete.map(i64::from))
                .bind(recipe.owner_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    let mapped = map_sqlx_error(e);
                    tracing::debug!("Recipe batch commit rejected: {}", mapped);
                    mapped
                })?;

            let mut recipe = recipe;
            recipe.id = Some(result.last_insert_rowid());
            committed.push(recipe);
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(committed)
    }

    async fn update(&self, recipe: Recipe) -> DomainResult<Recipe> {
        let id = recipe.id.ok_or_else(|| DomainError::NotFound {
            resource: "Recipe".to_string(),
        })?;

        let query = r#"
            UPDATE recipes
            SET title = ?, instructions = ?, minutes_to_complete = ?, owner_id = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&recipe.title)
            .bind(recipe.instructions())
            .bind(recipe.minutes_to_complete.map(i64::from))
            .bind(recipe.owner_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let mapped = map_sqlx_error(e);
                tracing::debug!("Recipe update rejected: {}", mapped);
                mapped
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Recipe".to_string(),
            });
        }

        Ok(recipe)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Recipe>> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_RECIPE);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_recipe(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Vec<Recipe>> {
        let query = format!("{} WHERE title = ? ORDER BY id", SELECT_RECIPE);

        let rows = sqlx::query(&query)
            .bind(title)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn find_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Recipe>> {
        // ascending id is insertion order; ids are assigned monotonically
        let query = format!("{} WHERE owner_id = ? ORDER BY id", SELECT_RECIPE);

        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let query = "DELETE FROM recipes WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM recipes")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> DomainResult<u64> {
        let result = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let count: i64 = result.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }
}
