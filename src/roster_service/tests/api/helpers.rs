use std::time::Duration;

use fake::{Fake, faker::internet::en::SafeEmail};
use roster_adapters::{
    config::{REQUEST_TIMEOUT_HEADER, test},
    hashing::Argon2Hasher,
    persistence::HashMapAccountStore,
};
use roster_application::AccountService;
use roster_core::{
    AccountId, AccountRecord, AccountStore, AccountStoreError, NewAccount, RequestContext,
};
use roster_service::AccountsServer;
use serde_json::{Value, json};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_store(HashMapAccountStore::new()).await
    }

    pub async fn with_store<S>(store: S) -> Self
    where
        S: AccountStore + 'static,
    {
        let hasher = Argon2Hasher::new(
            test::hashing::MEMORY_KIB,
            test::hashing::ITERATIONS,
            test::hashing::PARALLELISM,
        )
        .expect("Failed to build hasher");
        let service = AccountService::new(store, hasher);
        let router = AccountsServer::new(service, Duration::from_secs(5)).into_router();

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Failed to run test server");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_account(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/accounts", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_account(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/accounts", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_accounts_by_email(&self, email: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/accounts/by-email", &self.address))
            .query(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_verify_password(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/accounts/verify-password", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_account_with_timeout(&self, body: &Value, millis: u64) -> reqwest::Response {
        self.http_client
            .post(format!("{}/accounts", &self.address))
            .header(REQUEST_TIMEOUT_HEADER, millis.to_string())
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create an account and return the `account` object from the response.
    pub async fn create(&self, login: &str, email: &str, password: &str) -> Value {
        let response = self
            .post_account(&json!({
                "login": login,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.expect("Failed to parse body");
        body["account"].clone()
    }
}

pub fn get_random_login() -> String {
    format!("user.{}", uuid::Uuid::new_v4().simple())
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

/// Store that stalls every call, used to drive requests past their deadline.
#[derive(Clone)]
pub struct SlowAccountStore {
    inner: HashMapAccountStore,
    delay: Duration,
}

impl SlowAccountStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: HashMapAccountStore::new(),
            delay,
        }
    }

    pub fn inner(&self) -> &HashMapAccountStore {
        &self.inner
    }

    async fn stall(&self, ctx: &RequestContext) -> Result<(), AccountStoreError> {
        ctx.run(tokio::time::sleep(self.delay)).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for SlowAccountStore {
    async fn create_account(
        &self,
        ctx: &RequestContext,
        account: NewAccount,
    ) -> Result<AccountRecord, AccountStoreError> {
        self.stall(ctx).await?;
        self.inner.create_account(ctx, account).await
    }

    async fn get_account_by_id(
        &self,
        ctx: &RequestContext,
        id: &AccountId,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        self.stall(ctx).await?;
        self.inner.get_account_by_id(ctx, id).await
    }

    async fn get_account_by_login(
        &self,
        ctx: &RequestContext,
        login: &str,
    ) -> Result<Option<AccountRecord>, AccountStoreError> {
        self.stall(ctx).await?;
        self.inner.get_account_by_login(ctx, login).await
    }

    async fn get_accounts_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Vec<AccountRecord>, AccountStoreError> {
        self.stall(ctx).await?;
        self.inner.get_accounts_by_email(ctx, email).await
    }
}
