// Test doubles shared by the use case tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use roster_core::{
    AccountId, AccountRecord, AccountStore, AccountStoreError, CredentialHasher, HashedPassword,
    HashingError, NewAccount, Password, RequestContext,
};
use secrecy::{ExposeSecret, Secret};

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<Mutex<Vec<AccountRecord>>>,
    fail_reads: bool,
    corrupted_reads: bool,
    fail_writes: bool,
    read_delay: Option<Duration>,
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Every read decodes a malformed record.
    pub fn corrupted_reads() -> Self {
        Self {
            corrupted_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_read_delay(delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn insert(&self, record: AccountRecord) {
        self.accounts.lock().unwrap().push(record);
    }

    pub fn count_login(&self, login: &str) -> usize {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.login == login)
            .count()
    }

    async fn before_read(&self, ctx: &RequestContext) -> Result<(), AccountStoreError> {
        if let Some(delay) = self.read_delay {
            ctx.run(tokio::time::sleep(delay)).await?;
        }
        ctx.check()?;
        if self.fail_reads {
            return Err(AccountStoreError::UnexpectedError("read failed".to_string()));
        }
        if self.corrupted_reads {
            return Err(AccountStoreError::Corrupted(
                "stored id is not a uuid".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError> {
        ctx.check()?;
        if self.fail_writes {
            return Err(AccountStoreError::UnexpectedError("write failed".to_string()));
        }
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.login == account.login.as_str()) {
            return Err(AccountStoreError::LoginTaken);
        }
        let record = AccountRecord::create(account);
        accounts.push(record.clone());
        Ok(record)
    }

    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        self.before_read(ctx).await?;
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| &a.id == id).cloned())
    }

    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        self.before_read(ctx).await?;
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.login == login).cloned())
    }

    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError> {
        self.before_read(ctx).await?;
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().filter(|a| a.email == email).cloned().collect())
    }
}

/// Reversible stand-in for a real hasher.
#[derive(Clone, Default)]
pub struct MockHasher {
    fail: bool,
}

impl MockHasher {
    pub fn failing() -> Self {
        Self { fail: true }
    }

    pub fn hash_of(raw: &str) -> HashedPassword {
        HashedPassword::new(Secret::new(format!("mock${raw}")))
    }
}

#[async_trait::async_trait]
impl CredentialHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, HashingError> {
        // Let other tasks interleave between the uniqueness check and the write.
        tokio::task::yield_now().await;
        if self.fail {
            return Err(HashingError("hasher unavailable".to_string()));
        }
        Ok(Self::hash_of(password.as_ref().expose_secret()))
    }

    async fn verify(
        &self,
        hashed_password: &HashedPassword,
        raw_password: &Secret<String>,
    ) -> bool {
        let expected = format!("mock${}", raw_password.expose_secret());
        hashed_password.as_ref().expose_secret() == &expected
    }
}
