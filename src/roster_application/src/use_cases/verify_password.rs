use roster_core::{AccountStore, CredentialHasher, RequestContext};

use super::resolve_account;
use crate::{error::AccountServiceError, requests::VerifyPasswordRequest};

/// Verify password use case - checks a raw password against a stored account
pub struct VerifyPasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    store: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> VerifyPasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    pub fn new(store: &'a S, hasher: &'a H) -> Self {
        Self { store, hasher }
    }

    /// Execute the verify password use case
    ///
    /// # Returns
    /// Ok(()) when the password matches, or
    /// - `NotFound` when no account resolves from the id/login
    /// - `InvalidArgument` when the password is missing or does not match
    /// - `Internal` on store failure
    #[tracing::instrument(name = "VerifyPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        request: VerifyPasswordRequest,
    ) -> Result<(), AccountServiceError> {
        request.validate()?;

        let Some(lookup) = request.lookup() else {
            return Err(AccountServiceError::NotFound(
                "no account id or login supplied".to_string(),
            ));
        };

        let account = resolve_account(self.store, ctx, &lookup)
            .await?
            .ok_or_else(|| {
                AccountServiceError::NotFound(format!("account for {lookup} not found"))
            })?;

        let verification = self
            .hasher
            .verify(&account.hashed_password, &request.password);
        let matches = ctx.run(verification).await?;

        if !matches {
            tracing::debug!(account_id = %account.id, "credential mismatch");
            return Err(AccountServiceError::InvalidArgument(
                "credential mismatch".to_string(),
            ));
        }

        Ok(())
    }
}
