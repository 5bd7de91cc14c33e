//! Credential hashing and verification value objects.
//!
//! Secrets are hashed with bcrypt, which embeds a per-secret random salt
//! in the stored verifier. The plaintext is never kept: a verifier can
//! only answer "does this secret match", never "what was the secret".

use std::fmt;

use crate::config::CredentialConfig;
use crate::errors::CredentialError;

/// One-way transform from a plaintext secret to a stored verifier
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    /// Creates a hasher from configuration
    pub fn new(config: CredentialConfig) -> Self {
        Self { cost: config.cost }
    }

    /// Creates a hasher with an explicit bcrypt cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext secret into a salted verifier
    pub fn hash(&self, secret: &str) -> Result<CredentialVerifier, CredentialError> {
        let hashed = bcrypt::hash(secret, self.cost).map_err(|e| CredentialError::Hash {
            message: e.to_string(),
        })?;
        Ok(CredentialVerifier(hashed))
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(CredentialConfig::default())
    }
}

/// Salted one-way verifier for an account credential
///
/// Holds the bcrypt output string. The raw value never leaves the crate;
/// it is surfaced only to the storage layer for persistence.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialVerifier(String);

impl CredentialVerifier {
    /// Rebuilds a verifier from its stored representation
    pub(crate) fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    /// Stored representation, for the storage layer only
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a candidate secret against this verifier
    ///
    /// Re-applies the salt embedded in the verifier and compares the
    /// results. Returns `Ok(false)` for a well-formed mismatch and an
    /// error only when the stored verifier itself is unusable.
    pub fn verify(&self, secret: &str) -> Result<bool, CredentialError> {
        bcrypt::verify(secret, &self.0).map_err(|e| CredentialError::Hash {
            message: e.to_string(),
        })
    }
}

impl fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialVerifier(<redacted>)")
    }
}
