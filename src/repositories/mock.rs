//! Mock repository implementations for testing
//!
//! In-memory stand-ins for the SQLite-backed repositories. They assign
//! identities at commit and apply each table's local constraints, so
//! consumers can unit-test against the same contract the real store
//! enforces. Referential integrity between recipes and accounts is the
//! one rule that needs the real store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::domain::entities::recipe::{Recipe, MIN_INSTRUCTIONS_CHARS};
use crate::errors::{ConstraintViolation, DomainError, DomainResult};
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::recipe_repository::RecipeRepository;

/// Rows keyed by their assigned identity
///
/// Identities grow monotonically and are never reused, so ascending key
/// order is insertion order.
struct MockTable<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> MockTable<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Mock account repository for testing
pub struct MockAccountRepository {
    accounts: Arc<RwLock<MockTable<Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(MockTable::new())),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn check_username(
    rows: &BTreeMap<i64, Account>,
    account: &Account,
    exclude: Option<i64>,
) -> DomainResult<()> {
    let username = match &account.username {
        Some(username) => username,
        None => {
            return Err(ConstraintViolation::NotNull {
                constraint: "accounts.username".to_string(),
            }
            .into());
        }
    };

    let taken = rows
        .iter()
        .any(|(id, row)| Some(*id) != exclude && row.username.as_deref() == Some(username.as_str()));
    if taken {
        return Err(ConstraintViolation::Unique {
            constraint: "accounts.username".to_string(),
        }
        .into());
    }

    Ok(())
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create(&self, account: Account) -> DomainResult<Account> {
        let mut table = self.accounts.write().await;

        check_username(&table.rows, &account, None)?;

        let id = table.assign_id();
        let mut account = account;
        account.id = Some(id);
        table.rows.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> DomainResult<Account> {
        let mut table = self.accounts.write().await;

        let id = match account.id {
            Some(id) if table.rows.contains_key(&id) => id,
            _ => {
                return Err(DomainError::NotFound {
                    resource: "Account".to_string(),
                })
            }
        };

        check_username(&table.rows, &account, Some(id))?;

        table.rows.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        let table = self.accounts.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        let table = self.accounts.read().await;
        Ok(table
            .rows
            .values()
            .find(|account| account.username.as_deref() == Some(username))
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        let table = self.accounts.read().await;
        Ok(table
            .rows
            .values()
            .any(|account| account.username.as_deref() == Some(username)))
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut table = self.accounts.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut table = self.accounts.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn count(&self) -> DomainResult<u64> {
        let table = self.accounts.read().await;
        Ok(table.rows.len() as u64)
    }
}

/// Mock recipe repository for testing
///
/// Owner references are not resolved against any account table here;
/// foreign key checks are exercised against the real store.
pub struct MockRecipeRepository {
    recipes: Arc<RwLock<MockTable<Recipe>>>,
}

impl MockRecipeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(RwLock::new(MockTable::new())),
        }
    }
}

impl Default for MockRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn check_recipe(recipe: &Recipe) -> DomainResult<()> {
    if recipe.title.is_none() {
        return Err(ConstraintViolation::NotNull {
            constraint: "recipes.title".to_string(),
        }
        .into());
    }

    let instructions = match recipe.instructions() {
        Some(instructions) => instructions,
        None => {
            return Err(ConstraintViolation::NotNull {
                constraint: "recipes.instructions".to_string(),
            }
            .into());
        }
    };
    if instructions.chars().count() < MIN_INSTRUCTIONS_CHARS {
        return Err(ConstraintViolation::Check {
            constraint: "instructions_min_length".to_string(),
        }
        .into());
    }

    if recipe.owner_id.is_none() {
        return Err(ConstraintViolation::NotNull {
            constraint: "recipes.owner_id".to_string(),
        }
        .into());
    }

    Ok(())
}

#[async_trait]
impl RecipeRepository for MockRecipeRepository {
    async fn create(&self, recipe: Recipe) -> DomainResult<Recipe> {
        let mut table = self.recipes.write().await;

        check_recipe(&recipe)?;

        let id = table.assign_id();
        let mut recipe = recipe;
        recipe.id = Some(id);
        table.rows.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn create_many(&self, recipes: Vec<Recipe>) -> DomainResult<Vec<Recipe>> {
        let mut table = self.recipes.write().await;

        // all-or-nothing: reject the whole batch before touching rows
        for recipe in &recipes {
            check_recipe(recipe)?;
        }

        let mut committed = Vec::with_capacity(recipes.len());
        for mut recipe in recipes {
            let id = table.assign_id();
            recipe.id = Some(id);
            table.rows.insert(id, recipe.clone());
            committed.push(recipe);
        }
        Ok(committed)
    }

    async fn update(&self, recipe: Recipe) -> DomainResult<Recipe> {
        let mut table = self.recipes.write().await;

        let id = match recipe.id {
            Some(id) if table.rows.contains_key(&id) => id,
            _ => {
                return Err(DomainError::NotFound {
                    resource: "Recipe".to_string(),
                })
            }
        };

        check_recipe(&recipe)?;

        table.rows.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Recipe>> {
        let table = self.recipes.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Vec<Recipe>> {
        let table = self.recipes.read().await;
        Ok(table
            .rows
            .values()
            .filter(|recipe| recipe.title.as_deref() == Some(title))
            .cloned()
            .collect())
    }

    async fn find_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Recipe>> {
        let table = self.recipes.read().await;
        Ok(table
            .rows
            .values()
            .filter(|recipe| recipe.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut table = self.recipes.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut table = self.recipes.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn count(&self) -> DomainResult<u64> {
        let table = self.recipes.read().await;
        Ok(table.rows.len() as u64)
    }
}
