//! Credential hashing configuration

use serde::{Deserialize, Serialize};

/// Configuration for the credential hasher
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// bcrypt cost factor
    ///
    /// Valid range is 4 to 31. Higher values slow hashing down
    /// exponentially.
    pub cost: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
            .parse()
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self { cost }
    }

    /// Create a configuration with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}
