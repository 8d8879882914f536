use chrono::{DateTime, Utc};
use roster_core::{
    AccountId, AccountRecord, AccountStore, AccountStoreError, HashedPassword, NewAccount,
    RequestContext,
};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Row, migrate::MigrateError, postgres::PgRow};
use uuid::Uuid;

const SELECT_ACCOUNT: &str = r#"
    SELECT id, login, email, password_hash, created_at, updated_at
    FROM accounts
"#;

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError> {
        let record = AccountRecord::create(account);

        let query = sqlx::query(
            r#"
                INSERT INTO accounts (id, login, email, password_hash, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (login) DO NOTHING
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.login)
        .bind(&record.email)
        .bind(record.hashed_password.as_ref().expose_secret())
        .bind(record.created_at)
        .bind(record.updated_at);

        let result = ctx
            .run(query.execute(&self.pool))
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::LoginTaken);
        }

        Ok(record)
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip_all)]
    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let sql = format!("{SELECT_ACCOUNT} WHERE id = $1");
        let query = sqlx::query(&sql).bind(id.as_uuid());

        let row = ctx
            .run(query.fetch_optional(&self.pool))
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.as_ref().map(record_from_row).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by login from PostgreSQL", skip_all)]
    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        let sql = format!("{SELECT_ACCOUNT} WHERE login = $1");
        let query = sqlx::query(&sql).bind(login);

        let row = ctx
            .run(query.fetch_optional(&self.pool))
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.as_ref().map(record_from_row).transpose()
    }

    #[tracing::instrument(name = "Retrieving accounts by email from PostgreSQL", skip_all)]
    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError> {
        let sql = format!("{SELECT_ACCOUNT} WHERE email = $1 ORDER BY created_at");
        let query = sqlx::query(&sql).bind(email);

        let rows = ctx
            .run(query.fetch_all(&self.pool))
            .await?
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        rows.iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: &PgRow) -> Result<AccountRecord, AccountStoreError> {
    let decode = || -> Result<AccountRecord, sqlx::Error> {
        Ok(AccountRecord {
            id: AccountId::from(row.try_get::<Uuid, _>("id")?),
            login: row.try_get("login")?,
            email: row.try_get("email")?,
            hashed_password: HashedPassword::from(row.try_get::<String, _>("password_hash")?),
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    };

    decode().map_err(|e| {
        tracing::warn!(error = %e, "undecodable account row");
        AccountStoreError::Corrupted(e.to_string())
    })
}
