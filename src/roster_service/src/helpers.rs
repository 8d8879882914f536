use color_eyre::eyre::Result;
use redis::{RedisResult, aio::MultiplexedConnection};
use roster_adapters::{
    config::{PostgresSettings, RedisSettings},
    persistence::PostgresAccountStore,
};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

/// Connect to PostgreSQL and bring the schema up to date.
///
/// # Returns
/// A store backed by a fresh connection pool, or the connection/migration error
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PostgresAccountStore> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await?;

    let store = PostgresAccountStore::new(pg_pool);
    store.migrate().await?;

    Ok(store)
}

/// Open a multiplexed Redis connection.
///
/// The connection is cheap to clone; every clone shares one socket.
pub async fn configure_redis(settings: &RedisSettings) -> RedisResult<MultiplexedConnection> {
    redis::Client::open(settings.url.expose_secret().as_str())?
        .get_multiplexed_async_connection()
        .await
}
