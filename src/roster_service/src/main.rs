use std::time::Duration;

use color_eyre::eyre::Result;
use roster_adapters::{
    config::{Settings, StoreBackend},
    hashing::Argon2Hasher,
    persistence::{HashMapAccountStore, RedisAccountStore},
};
use roster_application::{AccountPolicy, AccountService};
use roster_core::AccountStore;
use roster_service::{AccountsServer, configure_postgresql, configure_redis, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let hasher = Argon2Hasher::from_settings(&settings.hashing)?;
    let policy = AccountPolicy::from(&settings.accounts);
    let request_timeout = settings.application.request_timeout();

    let listener = TcpListener::bind(settings.application.address()).await?;

    match settings.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory account store; accounts are lost on restart");
            let store = HashMapAccountStore::new();
            serve(store, hasher, policy, request_timeout, listener).await
        }
        StoreBackend::Postgres => {
            let store = configure_postgresql(&settings.store.postgres).await?;
            serve(store, hasher, policy, request_timeout, listener).await
        }
        StoreBackend::Redis => {
            let conn = configure_redis(&settings.store.redis).await?;
            let store = RedisAccountStore::new(conn, settings.store.redis.key_prefix.clone());
            serve(store, hasher, policy, request_timeout, listener).await
        }
    }
}

async fn serve<S>(
    store: S,
    hasher: Argon2Hasher,
    policy: AccountPolicy,
    request_timeout: Duration,
    listener: TcpListener,
) -> Result<()>
where
    S: AccountStore + 'static,
{
    let service = AccountService::new(store, hasher).with_policy(policy);

    tracing::info!(unique_email = policy.unique_email, "Starting accounts service...");
    AccountsServer::new(service, request_timeout)
        .run_standalone(listener)
        .await?;

    Ok(())
}
