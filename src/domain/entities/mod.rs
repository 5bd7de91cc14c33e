//! Domain entities representing core business objects.

pub mod account;
pub mod recipe;

// Re-export commonly used types
pub use account::Account;
pub use recipe::{validate_instructions, Recipe, MIN_INSTRUCTIONS_CHARS};
