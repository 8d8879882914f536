use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

#[derive(Debug, Error)]
#[error("Failed to hash password: {0}")]
pub struct HashingError(pub String);

/// One-way credential hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, HashingError>;

    /// `false` for a mismatch and for a hash that cannot be parsed.
    async fn verify(
        &self,
        hashed_password: &HashedPassword,
        raw_password: &Secret<String>,
    ) -> bool;
}
