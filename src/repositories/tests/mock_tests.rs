//! Unit tests for the mock repositories
//!
//! These exercise the persistence contract the mocks share with the
//! SQLite implementations: identity assignment at commit, constraint
//! rejection, and insertion-ordered collections.

use crate::domain::entities::account::Account;
use crate::domain::entities::recipe::Recipe;
use crate::errors::{ConstraintViolation, DomainError};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockRecipeRepository, RecipeRepository,
};

const INSTRUCTIONS: &str =
    "Or kind rest bred with am shed then. In raptures building an bringing be.";

#[tokio::test]
async fn test_mock_repository_create_assigns_sequential_ids() {
    let repo = MockAccountRepository::new();

    let first = repo.create(Account::new("Liz")).await.unwrap();
    let second = repo.create(Account::new("Ben")).await.unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert!(first.is_committed());
}

#[tokio::test]
async fn test_mock_repository_rejects_missing_username() {
    let repo = MockAccountRepository::new();

    let result = repo.create(Account::default()).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::NotNull { .. })
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_mock_repository_rejects_duplicate_username() {
    let repo = MockAccountRepository::new();

    repo.create(Account::new("Ben")).await.unwrap();
    let result = repo.create(Account::new("Ben")).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::Unique { .. })
    ));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_mock_repository_update_requires_committed_account() {
    let repo = MockAccountRepository::new();

    let result = repo.update(Account::new("Liz")).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_mock_repository_update_keeps_username_unique() {
    let repo = MockAccountRepository::new();

    repo.create(Account::new("Liz")).await.unwrap();
    let mut ben = repo.create(Account::new("Ben")).await.unwrap();

    ben.username = Some("Liz".to_string());
    let result = repo.update(ben.clone()).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::Unique { .. })
    ));

    // updating without changing the username is not a self-conflict
    ben.username = Some("Ben".to_string());
    ben.bio = Some("a bio".to_string());
    let updated = repo.update(ben).await.unwrap();
    assert_eq!(updated.bio.as_deref(), Some("a bio"));
}

#[tokio::test]
async fn test_mock_repository_find_by_username() {
    let repo = MockAccountRepository::new();

    repo.create(Account::new("Liz")).await.unwrap();

    let found = repo.find_by_username("Liz").await.unwrap();
    assert!(found.is_some());
    assert!(repo.exists_by_username("Liz").await.unwrap());
    assert!(!repo.exists_by_username("liz").await.unwrap());
}

#[tokio::test]
async fn test_mock_repository_delete() {
    let repo = MockAccountRepository::new();

    let liz = repo.create(Account::new("Liz")).await.unwrap();
    let id = liz.id.unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_delete_all_does_not_reuse_ids() {
    let repo = MockAccountRepository::new();

    repo.create(Account::new("Liz")).await.unwrap();
    repo.create(Account::new("Ben")).await.unwrap();

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert_eq!(repo.count().await.unwrap(), 0);

    let next = repo.create(Account::new("Prabhdip")).await.unwrap();
    assert_eq!(next.id, Some(3));
}

#[tokio::test]
async fn test_mock_recipe_repository_create() {
    let repo = MockRecipeRepository::new();

    let recipe = Recipe::new("Delicious Shed Ham", INSTRUCTIONS)
        .unwrap()
        .with_minutes_to_complete(60)
        .with_owner_id(1);

    let committed = repo.create(recipe).await.unwrap();
    assert_eq!(committed.id, Some(1));

    let found = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found.title.as_deref(), Some("Delicious Shed Ham"));
    assert_eq!(found.minutes_to_complete, Some(60));
}

#[tokio::test]
async fn test_mock_recipe_repository_rejects_missing_title() {
    let repo = MockRecipeRepository::new();

    let mut recipe = Recipe::new("placeholder", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    recipe.title = None;

    let result = repo.create(recipe).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::NotNull { ref constraint })
            if constraint == "recipes.title"
    ));
}

#[tokio::test]
async fn test_mock_recipe_repository_rejects_missing_owner() {
    let repo = MockRecipeRepository::new();

    let recipe = Recipe::new("Delicious Shed Ham", INSTRUCTIONS).unwrap();

    let result = repo.create(recipe).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::NotNull { ref constraint })
            if constraint == "recipes.owner_id"
    ));
}

#[tokio::test]
async fn test_mock_recipe_repository_checks_instructions_at_commit() {
    let repo = MockRecipeRepository::new();

    // sneak past the in-memory guard; the table check still rejects it
    let mut bypassed = Recipe::new("Generic Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    bypassed.restore_instructions(Some("idk lol".to_string()));

    let result = repo.create(bypassed).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::Check { .. })
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_mock_recipe_repository_create_many_is_all_or_nothing() {
    let repo = MockRecipeRepository::new();

    let good = Recipe::new("Delicious Shed Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    let mut bad = Recipe::new("placeholder", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    bad.title = None;

    let result = repo.create_many(vec![good.clone(), bad]).await;
    assert!(result.is_err());
    assert_eq!(repo.count().await.unwrap(), 0);

    let committed = repo.create_many(vec![good.clone(), good]).await.unwrap();
    assert_eq!(committed.len(), 2);
    assert_eq!(committed[0].id, Some(1));
    assert_eq!(committed[1].id, Some(2));
}

#[tokio::test]
async fn test_mock_recipe_repository_find_by_owner_in_insertion_order() {
    let repo = MockRecipeRepository::new();

    let shed = Recipe::new("Delicious Shed Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    let other = Recipe::new("Someone Else's Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(2);
    let hasty = Recipe::new("Hasty Party Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);

    repo.create(shed).await.unwrap();
    repo.create(other).await.unwrap();
    repo.create(hasty).await.unwrap();

    let owned = repo.find_by_owner(1).await.unwrap();
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].title.as_deref(), Some("Delicious Shed Ham"));
    assert_eq!(owned[1].title.as_deref(), Some("Hasty Party Ham"));
}

#[tokio::test]
async fn test_mock_recipe_repository_find_by_title() {
    let repo = MockRecipeRepository::new();

    let first = Recipe::new("Hasty Party Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(1);
    let second = Recipe::new("Hasty Party Ham", INSTRUCTIONS)
        .unwrap()
        .with_owner_id(2);

    repo.create(first).await.unwrap();
    repo.create(second).await.unwrap();

    let found = repo.find_by_title("Hasty Party Ham").await.unwrap();
    assert_eq!(found.len(), 2);
    assert!(repo.find_by_title("Unknown").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mock_recipe_repository_update_revalidates() {
    let repo = MockRecipeRepository::new();

    let committed = repo
        .create(
            Recipe::new("Delicious Shed Ham", INSTRUCTIONS)
                .unwrap()
                .with_owner_id(1),
        )
        .await
        .unwrap();

    let mut stripped = committed.clone();
    stripped.title = None;
    let result = repo.update(stripped).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Constraint(ConstraintViolation::NotNull { .. })
    ));

    // the committed row is untouched by the failed update
    let found = repo.find_by_id(committed.id.unwrap()).await.unwrap();
    assert_eq!(found.unwrap().title.as_deref(), Some("Delicious Shed Ham"));
}
