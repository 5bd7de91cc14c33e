//! Recipe entity and its content rules.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::account::Account;
use crate::errors::ValidationError;

/// Minimum number of characters required in recipe instructions
pub const MIN_INSTRUCTIONS_CHARS: usize = 50;

/// Validates recipe instructions against the minimum-length rule
///
/// Counts characters, not bytes. The same rule is enforced a second time
/// by the store's schema, so bypassing this guard still cannot commit an
/// undersized recipe.
pub fn validate_instructions(instructions: &str) -> Result<(), ValidationError> {
    let actual = instructions.chars().count();
    if actual < MIN_INSTRUCTIONS_CHARS {
        return Err(ValidationError::InstructionsTooShort {
            minimum: MIN_INSTRUCTIONS_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Recipe entity owned by exactly one account
///
/// Like accounts, a recipe starts out uncommitted (`id` is `None`) and
/// only gains an identity when the store accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier; `None` until the first successful commit
    pub id: Option<i64>,

    /// Recipe title; the store rejects missing values
    pub title: Option<String>,

    /// Preparation instructions, at least [`MIN_INSTRUCTIONS_CHARS`]
    /// characters long
    #[serde(default, deserialize_with = "deserialize_instructions")]
    instructions: Option<String>,

    /// Estimated preparation time in minutes
    pub minutes_to_complete: Option<u32>,

    /// Identity of the owning account; the store rejects missing and
    /// unknown owners
    pub owner_id: Option<i64>,
}

impl Recipe {
    /// Creates a new uncommitted recipe
    ///
    /// Fails with [`ValidationError::InstructionsTooShort`] before any
    /// commit is attempted when the instructions are undersized.
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let instructions = instructions.into();
        validate_instructions(&instructions)?;

        Ok(Self {
            title: Some(title.into()),
            instructions: Some(instructions),
            ..Self::default()
        })
    }

    /// Sets the estimated preparation time
    pub fn with_minutes_to_complete(mut self, minutes: u32) -> Self {
        self.minutes_to_complete = Some(minutes);
        self
    }

    /// Resolves the owner reference from an account
    ///
    /// An uncommitted account has no identity yet; the owner reference
    /// then stays unset and the store rejects the recipe at commit.
    pub fn with_owner(mut self, owner: &Account) -> Self {
        self.owner_id = owner.id;
        self
    }

    /// Sets the owning account by identity
    pub fn with_owner_id(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Preparation instructions, when set
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Replaces the preparation instructions
    ///
    /// Subject to the same minimum-length rule as construction. On
    /// failure the previous instructions are kept.
    pub fn set_instructions(
        &mut self,
        instructions: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let instructions = instructions.into();
        validate_instructions(&instructions)?;
        self.instructions = Some(instructions);
        Ok(())
    }

    /// Checks whether the store has accepted this recipe
    pub fn is_committed(&self) -> bool {
        self.id.is_some()
    }

    /// Restores instructions from a committed row, for the storage layer
    /// only
    pub(crate) fn restore_instructions(&mut self, instructions: Option<String>) {
        self.instructions = instructions;
    }
}

/// Applies the instructions rule during deserialization
///
/// Keeps deserialized recipes on the same footing as constructed ones;
/// undersized instructions are rejected instead of smuggled in.
fn deserialize_instructions<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let instructions = Option::<String>::deserialize(deserializer)?;
    if let Some(text) = &instructions {
        validate_instructions(text).map_err(serde::de::Error::custom)?;
    }
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_INSTRUCTIONS: &str =
        "Or kind rest bred with am shed then. In raptures building an bringing be.";

    #[test]
    fn test_new_recipe_creation() {
        let recipe = Recipe::new("Delicious Shed Ham", VALID_INSTRUCTIONS)
            .unwrap()
            .with_minutes_to_complete(60)
            .with_owner_id(1);

        assert_eq!(recipe.id, None);
        assert_eq!(recipe.title.as_deref(), Some("Delicious Shed Ham"));
        assert_eq!(recipe.instructions(), Some(VALID_INSTRUCTIONS));
        assert_eq!(recipe.minutes_to_complete, Some(60));
        assert_eq!(recipe.owner_id, Some(1));
        assert!(!recipe.is_committed());
    }

    #[test]
    fn test_instructions_must_reach_minimum_length() {
        let result = Recipe::new("Generic Ham", "idk lol");

        assert!(matches!(
            result,
            Err(ValidationError::InstructionsTooShort {
                minimum: MIN_INSTRUCTIONS_CHARS,
                actual: 7,
            })
        ));
    }

    #[test]
    fn test_exactly_fifty_characters_is_accepted() {
        let instructions = "x".repeat(MIN_INSTRUCTIONS_CHARS);
        assert!(Recipe::new("Boundary Ham", instructions).is_ok());

        let undersized = "x".repeat(MIN_INSTRUCTIONS_CHARS - 1);
        assert!(Recipe::new("Boundary Ham", undersized).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 49 characters, far more than 50 bytes in UTF-8
        let instructions = "宀".repeat(MIN_INSTRUCTIONS_CHARS - 1);
        assert!(instructions.len() >= MIN_INSTRUCTIONS_CHARS);

        assert!(matches!(
            validate_instructions(&instructions),
            Err(ValidationError::InstructionsTooShort { actual: 49, .. })
        ));
    }

    #[test]
    fn test_set_instructions_keeps_previous_value_on_failure() {
        let mut recipe = Recipe::new("Delicious Shed Ham", VALID_INSTRUCTIONS).unwrap();

        let result = recipe.set_instructions("idk lol");
        assert!(result.is_err());
        assert_eq!(recipe.instructions(), Some(VALID_INSTRUCTIONS));

        let longer = format!("{} Mistress strongly remember up to.", VALID_INSTRUCTIONS);
        recipe.set_instructions(longer.clone()).unwrap();
        assert_eq!(recipe.instructions(), Some(longer.as_str()));
    }

    #[test]
    fn test_owner_resolution_from_account() {
        let uncommitted = Account::new("Liz");
        let recipe = Recipe::new("Delicious Shed Ham", VALID_INSTRUCTIONS)
            .unwrap()
            .with_owner(&uncommitted);
        assert_eq!(recipe.owner_id, None);

        let mut committed = Account::new("Liz");
        committed.id = Some(7);
        let recipe = Recipe::new("Delicious Shed Ham", VALID_INSTRUCTIONS)
            .unwrap()
            .with_owner(&committed);
        assert_eq!(recipe.owner_id, Some(7));
    }

    #[test]
    fn test_deserialization_applies_instructions_rule() {
        let result: Result<Recipe, _> = serde_json::from_str(
            r#"{"title": "Generic Ham", "instructions": "idk lol", "owner_id": 1}"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Instructions too short"));
    }

    #[test]
    fn test_deserialization_accepts_valid_instructions() {
        let json = format!(
            r#"{{"title": "Delicious Shed Ham", "instructions": "{}", "minutes_to_complete": 60}}"#,
            VALID_INSTRUCTIONS
        );
        let recipe: Recipe = serde_json::from_str(&json).unwrap();

        assert_eq!(recipe.instructions(), Some(VALID_INSTRUCTIONS));
        assert_eq!(recipe.minutes_to_complete, Some(60));
        assert_eq!(recipe.owner_id, None);
    }

    #[test]
    fn test_deserialization_allows_missing_instructions() {
        // the store, not the deserializer, rejects missing instructions
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Generic Ham"}"#).unwrap();
        assert_eq!(recipe.instructions(), None);
    }
}
