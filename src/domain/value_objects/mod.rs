//! Value objects representing immutable domain concepts.

pub mod credential;

// Re-export commonly used types
pub use credential::{CredentialHasher, CredentialVerifier};
