pub mod create_account;
pub mod find_accounts_by_email;
pub mod get_account;
pub mod verify_password;

pub use create_account::CreateAccountUseCase;
pub use find_accounts_by_email::FindAccountsByEmailUseCase;
pub use get_account::GetAccountUseCase;
pub use verify_password::VerifyPasswordUseCase;

use roster_core::{AccountId, AccountRecord, AccountStore, AccountStoreError, RequestContext};

use crate::requests::AccountLookup;

/// Fetch the account a lookup refers to. An id that does not parse cannot
/// belong to any account and resolves to nothing.
async fn resolve_account<S>(
    store: &S,
    ctx: &RequestContext,
    lookup: &AccountLookup,
) -> Result<Option<AccountRecord>, AccountStoreError>
where
    S: AccountStore,
{
    match lookup {
        AccountLookup::Id(raw_id) => match AccountId::parse(raw_id) {
            Ok(id) => store.get_account_by_id(ctx, &id).await,
            Err(e) => {
                tracing::debug!(error = %e, "lookup by malformed id");
                Ok(None)
            }
        },
        AccountLookup::Login(login) => store.get_account_by_login(ctx, login).await,
    }
}
