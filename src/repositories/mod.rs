//! Repository interfaces for the persistence boundary.

pub mod account_repository;
pub mod mock;
pub mod recipe_repository;

#[cfg(test)]
mod tests;

pub use account_repository::AccountRepository;
pub use mock::{MockAccountRepository, MockRecipeRepository};
pub use recipe_repository::RecipeRepository;
