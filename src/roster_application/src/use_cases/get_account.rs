use roster_core::{Account, AccountStore, RequestContext};

use super::resolve_account;
use crate::{error::AccountServiceError, requests::GetAccountRequest};

/// Get account use case - looks an account up by id or login
pub struct GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Execute the get account use case
    ///
    /// A missing account is a successful empty result, as is a request that
    /// names neither an id nor a login.
    #[tracing::instrument(name = "GetAccountUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        request: GetAccountRequest,
    ) -> Result<Option<Account>, AccountServiceError> {
        let Some(lookup) = request.lookup() else {
            return Ok(None);
        };

        let account = resolve_account(self.store, ctx, &lookup).await?;

        Ok(account.map(Account::from))
    }
}
