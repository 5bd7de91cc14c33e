//! Account entity representing a registered member of the Potluck service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::recipe::Recipe;
use crate::domain::value_objects::credential::{CredentialHasher, CredentialVerifier};
use crate::errors::{CredentialError, DomainResult};
use crate::repositories::RecipeRepository;

/// Account entity representing a registered member
///
/// An account starts out uncommitted (`id` is `None`) and becomes
/// committed once the store accepts it and assigns an identity. A
/// rejected commit leaves the account uncommitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier; `None` until the first successful commit
    pub id: Option<i64>,

    /// Display name; the store rejects missing and duplicate values
    pub username: Option<String>,

    /// Stored credential verifier; write-only and never serialized
    #[serde(skip)]
    credential: Option<CredentialVerifier>,

    /// Profile image URL
    pub image_url: Option<String>,

    /// Short profile biography
    pub bio: Option<String>,
}

impl Account {
    /// Creates a new uncommitted account with the given username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// Sets the profile image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the profile biography
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Checks whether the store has accepted this account
    pub fn is_committed(&self) -> bool {
        self.id.is_some()
    }

    /// Hashes a plaintext secret and stores the resulting verifier
    ///
    /// Replaces any previously stored verifier. The plaintext itself is
    /// discarded.
    pub fn set_credential(
        &mut self,
        secret: &str,
        hasher: &CredentialHasher,
    ) -> Result<(), CredentialError> {
        self.credential = Some(hasher.hash(secret)?);
        Ok(())
    }

    /// Checks a candidate secret against the stored verifier
    ///
    /// Returns [`CredentialError::NotSet`] when no credential has been
    /// stored for this account.
    pub fn verify_credential(&self, secret: &str) -> Result<bool, CredentialError> {
        match &self.credential {
            Some(verifier) => verifier.verify(secret),
            None => Err(CredentialError::NotSet),
        }
    }

    /// Read access to the stored credential, which always fails
    ///
    /// The credential is write-only. This accessor exists so that the
    /// attempt is answered with [`CredentialError::ReadProtected`] rather
    /// than silently compiling into something else, whether or not a
    /// credential has been set.
    pub fn credential(&self) -> Result<&str, CredentialError> {
        Err(CredentialError::ReadProtected)
    }

    /// Checks whether a credential verifier is currently stored
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Committed recipes owned by this account, in insertion order
    ///
    /// Resolved through the recipe repository. An uncommitted account has
    /// no identity for recipes to reference, so the collection is empty.
    pub async fn recipes<R>(&self, repository: &R) -> DomainResult<Vec<Recipe>>
    where
        R: RecipeRepository + ?Sized,
    {
        match self.id {
            Some(owner_id) => repository.find_by_owner(owner_id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Stored verifier representation, for the storage layer only
    pub(crate) fn stored_credential(&self) -> Option<&str> {
        self.credential.as_ref().map(|verifier| verifier.as_str())
    }

    /// Rebuilds the verifier from its stored representation
    pub(crate) fn restore_credential(&mut self, stored: Option<String>) {
        self.credential = stored.map(CredentialVerifier::from_stored);
    }
}
