use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use redis::{Script, aio::MultiplexedConnection};
use roster_core::{
    AccountId, AccountRecord, AccountStore, AccountStoreError, HashedPassword, NewAccount,
    RequestContext,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// KEYS: login index, account record, email index. ARGV: id, record JSON.
// The login claim and both writes run as one script, so a lost race leaves
// nothing behind.
static CREATE_ACCOUNT_SCRIPT: LazyLock<Script> = LazyLock::new(|| {
    Script::new(
        r#"
        if redis.call('SET', KEYS[1], ARGV[1], 'NX') then
            redis.call('SET', KEYS[2], ARGV[2])
            redis.call('SADD', KEYS[3], ARGV[1])
            return 1
        end
        return 0
        "#,
    )
});

#[derive(Serialize, Deserialize)]
struct StoredAccount {
    id: Uuid,
    login: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&AccountRecord> for StoredAccount {
    fn from(record: &AccountRecord) -> Self {
        Self {
            id: *record.id.as_uuid(),
            login: record.login.clone(),
            email: record.email.clone(),
            password_hash: record.hashed_password.as_ref().expose_secret().clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<StoredAccount> for AccountRecord {
    fn from(stored: StoredAccount) -> Self {
        Self {
            id: AccountId::from(stored.id),
            login: stored.login,
            email: stored.email,
            hashed_password: HashedPassword::from(stored.password_hash),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct RedisAccountStore {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisAccountStore {
    pub fn new(conn: MultiplexedConnection, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    fn account_key(&self, id: &AccountId) -> String {
        format!("{}account:{}", self.key_prefix, id)
    }

    fn login_key(&self, login: &str) -> String {
        format!("{}login:{}", self.key_prefix, login)
    }

    fn email_key(&self, email: &str) -> String {
        format!("{}email:{}", self.key_prefix, email)
    }

    async fn load_record(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = ctx
            .run(
                redis::cmd("GET")
                    .arg(self.account_key(id))
                    .query_async(&mut conn),
            )
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        raw.map(|json| decode_record(&json)).transpose()
    }
}

#[async_trait::async_trait]
impl AccountStore for RedisAccountStore {
    #[tracing::instrument(name = "Adding account to Redis", skip_all)]
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError> {
        let record = AccountRecord::create(account);
        let json = serde_json::to_string(&StoredAccount::from(&record))
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let mut invocation = CREATE_ACCOUNT_SCRIPT.prepare_invoke();
        invocation
            .key(self.login_key(&record.login))
            .key(self.account_key(&record.id))
            .key(self.email_key(&record.email))
            .arg(record.id.to_string())
            .arg(json);

        let mut conn = self.conn.clone();
        let created: i64 = ctx
            .run(invocation.invoke_async(&mut conn))
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if created == 0 {
            return Err(AccountStoreError::LoginTaken);
        }

        Ok(record)
    }

    #[tracing::instrument(name = "Retrieving account by id from Redis", skip_all)]
    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        self.load_record(ctx, id).await
    }

    #[tracing::instrument(name = "Retrieving account by login from Redis", skip_all)]
    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let mut conn = self.conn.clone();
        let id: Option<String> = ctx
            .run(
                redis::cmd("GET")
                    .arg(self.login_key(login))
                    .query_async(&mut conn),
            )
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(id) = id else {
            return Ok(None);
        };

        self.load_record(ctx, &decode_id(&id)?).await
    }

    #[tracing::instrument(name = "Retrieving accounts by email from Redis", skip_all)]
    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError> {
        let mut conn = self.conn.clone();
        let ids: Vec<String> = ctx
            .run(
                redis::cmd("SMEMBERS")
                    .arg(self.email_key(email))
                    .query_async(&mut conn),
            )
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(record) = self.load_record(ctx, &decode_id(&id)?).await? {
                records.push(record);
            }
        }
        records.sort_by_key(|r| r.created_at);

        Ok(records)
    }
}

fn decode_id(raw: &str) -> Result<AccountId, AccountStoreError> {
    AccountId::parse(raw).map_err(|e| {
        tracing::warn!(error = %e, "account index points at a malformed id");
        AccountStoreError::Corrupted(e.to_string())
    })
}

fn decode_record(json: &str) -> Result<AccountRecord, AccountStoreError> {
    serde_json::from_str::<StoredAccount>(json)
        .map(AccountRecord::from)
        .map_err(|e| {
            tracing::warn!(error = %e, "undecodable account record");
            AccountStoreError::Corrupted(e.to_string())
        })
}
