use async_trait::async_trait;
use thiserror::Error;

use crate::{
    context::{Interrupted, RequestContext},
    domain::account::{AccountId, AccountRecord, NewAccount},
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    /// The conditional write on the login index found an existing account.
    #[error("Login already taken")]
    LoginTaken,
    /// A persisted record could not be decoded.
    #[error("Corrupted account record: {0}")]
    Corrupted(String),
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::LoginTaken, Self::LoginTaken) => true,
            (Self::Corrupted(_), Self::Corrupted(_)) => true,
            (Self::Interrupted(a), Self::Interrupted(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Keyed account storage with secondary indexes on login and email.
///
/// Lookups that match nothing return `Ok(None)` / an empty list, never an
/// error. `create_account` must make the login check and the write a single
/// atomic step and report a conflict as [`AccountStoreError::LoginTaken`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError>;

    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError>;

    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError>;

    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError>;
}
