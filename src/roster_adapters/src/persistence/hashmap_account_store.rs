use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use roster_core::{
    AccountId, AccountRecord, AccountStore, AccountStoreError, NewAccount, RequestContext,
};

#[derive(Default)]
struct Tables {
    accounts: HashMap<AccountId, AccountRecord>,
    by_login: HashMap<String, AccountId>,
    by_email: HashMap<String, Vec<AccountId>>,
}

/// In-memory store. Primary table and both indexes live behind one lock,
/// so the login check and the insert happen under the same write guard.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    tables: Arc<RwLock<Tables>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError> {
        let mut tables = ctx.run(self.tables.write()).await?;
        if tables.by_login.contains_key(account.login.as_str()) {
            return Err(AccountStoreError::LoginTaken);
        }

        let record = AccountRecord::create(account);
        tables.by_login.insert(record.login.clone(), record.id);
        tables
            .by_email
            .entry(record.email.clone())
            .or_default()
            .push(record.id);
        tables.accounts.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let tables = ctx.run(self.tables.read()).await?;
        Ok(tables.accounts.get(id).cloned())
    }

    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let tables = ctx.run(self.tables.read()).await?;
        Ok(tables
            .by_login
            .get(login)
            .and_then(|id| tables.accounts.get(id))
            .cloned())
    }

    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError> {
        let tables = ctx.run(self.tables.read()).await?;
        let Some(ids) = tables.by_email.get(email) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| tables.accounts.get(id))
            .cloned()
            .collect())
    }
}
