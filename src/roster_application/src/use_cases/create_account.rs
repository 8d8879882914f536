use roster_core::{
    Account, AccountStore, AccountStoreError, CredentialHasher, Email, Login, NewAccount, Password,
    RequestContext,
};

use crate::{
    account_service::AccountPolicy, error::AccountServiceError, requests::CreateAccountRequest,
};

/// Create account use case - validates, checks uniqueness, hashes and persists
pub struct CreateAccountUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    store: &'a S,
    hasher: &'a H,
    policy: AccountPolicy,
}

impl<'a, S, H> CreateAccountUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    pub fn new(store: &'a S, hasher: &'a H, policy: AccountPolicy) -> Self {
        Self {
            store,
            hasher,
            policy,
        }
    }

    /// Execute the create account use case
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for this request
    /// * `request` - Login, email and raw password
    ///
    /// # Returns
    /// The created account without its credential hash, or
    /// - `InvalidArgument` when a field is missing or malformed
    /// - `AlreadyExists` when the login (or, by policy, the email) is taken
    /// - `Internal` on store or hashing failure
    #[tracing::instrument(name = "CreateAccountUseCase::execute", skip_all, fields(login = %request.login))]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        request: CreateAccountRequest,
    ) -> Result<Account, AccountServiceError> {
        request.validate()?;

        let CreateAccountRequest {
            login,
            email,
            password,
        } = request;
        let password = Password::parse(password)?;
        let login = Login::parse(login)?;
        let email = Email::parse(email)?;

        // Pre-check for a clean error; the conditional write below is what
        // actually guarantees uniqueness.
        if self
            .store
            .get_account_by_login(ctx, login.as_str())
            .await?
            .is_some()
        {
            return Err(login_taken(&login));
        }

        if self.policy.unique_email
            && !self
                .store
                .get_accounts_by_email(ctx, email.as_str())
                .await?
                .is_empty()
        {
            return Err(AccountServiceError::AlreadyExists(
                "an account with this email already exists".to_string(),
            ));
        }

        let hashed_password = ctx.run(self.hasher.hash(&password)).await??;

        let record = self
            .store
            .create_account(
                ctx,
                NewAccount {
                    login: login.clone(),
                    email,
                    hashed_password,
                },
            )
            .await
            .map_err(|e| match e {
                AccountStoreError::LoginTaken => login_taken(&login),
                other => other.into(),
            })?;

        tracing::info!(account_id = %record.id, "account created");

        Ok(record.into())
    }
}

fn login_taken(login: &Login) -> AccountServiceError {
    AccountServiceError::AlreadyExists(format!("an account with login {login} already exists"))
}
