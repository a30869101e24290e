//! PostgreSQL persistence for the riyaz backend.
//!
//! Entity models live in [`models`], query code in [`repositories`], and
//! [`stores::PgStores`] adapts the pool to the store contracts the core
//! scoring engine runs against.

pub mod models;
pub mod repositories;
pub mod stores;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a pool from the `DATABASE_URL` environment variable, loading a
/// `.env` file first when one is present.
pub async fn connect_from_env() -> Result<DbPool, sqlx::Error> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL is not set".into()))?;
    create_pool(&url).await
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
