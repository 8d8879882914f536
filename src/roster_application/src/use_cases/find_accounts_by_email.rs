use roster_core::{Account, AccountStore, Email, RequestContext};

use crate::error::AccountServiceError;

/// Find accounts by email use case - queries the email index
pub struct FindAccountsByEmailUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> FindAccountsByEmailUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "FindAccountsByEmailUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        email: String,
    ) -> Result<Vec<Account>, AccountServiceError> {
        let email = Email::parse(email)?;

        let records = self
            .store
            .get_accounts_by_email(ctx, email.as_str())
            .await?;

        Ok(records.into_iter().map(Account::from).collect())
    }
}
