use roster_core::{Account, AccountStore, CredentialHasher, RequestContext};

use crate::{
    error::AccountServiceError,
    requests::{CreateAccountRequest, GetAccountRequest, VerifyPasswordRequest},
    use_cases::{
        CreateAccountUseCase, FindAccountsByEmailUseCase, GetAccountUseCase, VerifyPasswordUseCase,
    },
};

/// Deployment-level account rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountPolicy {
    /// Refuse to create an account whose email is already in use.
    pub unique_email: bool,
}

/// Entry point for account operations.
///
/// Holds the store and hasher and hands them to a fresh use case per call.
/// Each call is independent; the service keeps no per-request state.
#[derive(Clone)]
pub struct AccountService<S, H> {
    store: S,
    hasher: H,
    policy: AccountPolicy,
}

impl<S, H> AccountService<S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    pub fn new(store: S, hasher: H) -> Self {
        Self {
            store,
            hasher,
            policy: AccountPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AccountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn create_account(
        &self,
        ctx: &RequestContext,
        request: CreateAccountRequest,
    ) -> Result<Account, AccountServiceError> {
        CreateAccountUseCase::new(&self.store, &self.hasher, self.policy)
            .execute(ctx, request)
            .await
    }

    pub async fn get_account(
        &self,
        ctx: &RequestContext,
        request: GetAccountRequest,
    ) -> Result<Option<Account>, AccountServiceError> {
        GetAccountUseCase::new(&self.store)
            .execute(ctx, request)
            .await
    }

    pub async fn verify_password(
        &self,
        ctx: &RequestContext,
        request: VerifyPasswordRequest,
    ) -> Result<(), AccountServiceError> {
        VerifyPasswordUseCase::new(&self.store, &self.hasher)
            .execute(ctx, request)
            .await
    }

    pub async fn find_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: String,
    ) -> Result<Vec<Account>, AccountServiceError> {
        FindAccountsByEmailUseCase::new(&self.store)
            .execute(ctx, email)
            .await
    }
}
