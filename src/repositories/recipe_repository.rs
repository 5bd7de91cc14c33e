//! Recipe repository trait defining the interface for recipe persistence.

use async_trait::async_trait;

use crate::domain::entities::recipe::Recipe;
use crate::errors::DomainResult;

/// Repository trait for Recipe entity persistence operations
///
/// The store enforces the recipe rules a second time at commit: title
/// and owner must be present, the owner must exist, and the
/// instructions must reach the minimum length even if the in-memory
/// guard was bypassed.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Submit a new recipe for commit
    ///
    /// # Arguments
    /// * `recipe` - The uncommitted recipe to persist
    ///
    /// # Returns
    /// * `Ok(Recipe)` - The committed recipe with its assigned id
    /// * `Err(DomainError)` - Constraint violation or database error
    async fn create(&self, recipe: Recipe) -> DomainResult<Recipe>;

    /// Submit several recipes in a single all-or-nothing commit
    ///
    /// Either every recipe is committed or none is; the first rejected
    /// recipe rolls the whole batch back.
    ///
    /// # Arguments
    /// * `recipes` - The uncommitted recipes to persist, in order
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - The committed recipes with assigned ids
    /// * `Err(DomainError)` - Constraint violation or database error
    ///
    /// # Example
    /// ```no_run
    /// # use potluck_core::repositories::RecipeRepository;
    /// # use potluck_core::domain::entities::recipe::Recipe;
    /// # async fn example(repo: &impl RecipeRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let ham = Recipe::new(
    ///     "Delicious Shed Ham",
    ///     "Or kind rest bred with am shed then. In raptures building an bringing be.",
    /// )?
    /// .with_owner_id(1);
    /// let stew = Recipe::new(
    ///     "Hasty Party Stew",
    ///     "As am hastily invited settled at limited civilly fortune me. Really spring in extent an by.",
    /// )?
    /// .with_owner_id(1);
    ///
    /// let committed = repo.create_many(vec![ham, stew]).await?;
    /// assert_eq!(committed.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    async fn create_many(&self, recipes: Vec<Recipe>) -> DomainResult<Vec<Recipe>>;

    /// Re-submit a committed recipe with updated fields
    ///
    /// # Arguments
    /// * `recipe` - The committed recipe with updated fields
    ///
    /// # Returns
    /// * `Ok(Recipe)` - The updated recipe
    /// * `Err(DomainError)` - Not found, constraint violation, or
    ///   database error
    async fn update(&self, recipe: Recipe) -> DomainResult<Recipe>;

    /// Find a recipe by its store-assigned identifier
    ///
    /// # Arguments
    /// * `id` - The identifier assigned at commit
    ///
    /// # Returns
    /// * `Ok(Some(Recipe))` - Recipe found
    /// * `Ok(None)` - No recipe with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Recipe>>;

    /// Find all recipes with the given title
    ///
    /// Titles are not unique, so the result is a collection in
    /// insertion order.
    ///
    /// # Arguments
    /// * `title` - The exact title to look up
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - Matching recipes, possibly empty
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_title(&self, title: &str) -> DomainResult<Vec<Recipe>>;

    /// Find all recipes owned by an account, in insertion order
    ///
    /// # Arguments
    /// * `owner_id` - Identity of the owning account
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - The owner's recipes, possibly empty
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Recipe>>;

    /// Delete a recipe from the store
    ///
    /// # Arguments
    /// * `id` - The identifier of the recipe to delete
    ///
    /// # Returns
    /// * `Ok(true)` - Recipe was deleted
    /// * `Ok(false)` - Recipe not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: i64) -> DomainResult<bool>;

    /// Delete every recipe in the store
    ///
    /// # Returns
    /// * `Ok(count)` - Number of recipes removed
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_all(&self) -> DomainResult<u64>;

    /// Count all committed recipes
    ///
    /// # Returns
    /// * `Ok(count)` - Number of recipes in the store
    /// * `Err(DomainError)` - Database error occurred
    async fn count(&self) -> DomainResult<u64>;
}
