use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use roster_core::{CredentialHasher, HashedPassword, HashingError, Password};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id credential hasher.
///
/// Hashes are PHC strings carrying algorithm, version, cost parameters and
/// salt, so verification needs nothing but the stored string. The CPU-heavy
/// work runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, HashingError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashingError(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn from_settings(settings: &HashingSettings) -> Result<Self, HashingError> {
        Self::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn hash_blocking(&self, raw_password: &str) -> Result<HashedPassword, HashingError> {
        let salt = SaltString::generate(rand_core::OsRng);
        self.argon2()
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|h| HashedPassword::new(Secret::new(h.to_string())))
            .map_err(|e| HashingError(e.to_string()))
    }

    /// Parameters are read from the hash itself, so hashes produced under an
    /// older cost setting still verify.
    pub fn verify_blocking(&self, hashed_password: &str, raw_password: &str) -> bool {
        let Ok(expected) = PasswordHash::new(hashed_password) else {
            tracing::warn!("stored credential hash is not a valid PHC string");
            return false;
        };

        self.argon2()
            .verify_password(raw_password.as_bytes(), &expected)
            .is_ok()
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::from_settings(&HashingSettings::default()).unwrap_or(Self {
            params: Params::default(),
        })
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, HashingError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| hasher.hash_blocking(password.as_ref().expose_secret()))
        })
        .await
        .map_err(|e| HashingError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        hashed_password: &HashedPassword,
        raw_password: &Secret<String>,
    ) -> bool {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.clone();
        let hashed_password = hashed_password.clone();
        let raw_password = raw_password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                hasher.verify_blocking(
                    hashed_password.as_ref().expose_secret(),
                    raw_password.expose_secret(),
                )
            })
        })
        .await
        .unwrap_or(false)
    }
}
