//! Database test fixtures
//!
//! Postgres-backed tests run only when `DATABASE_URL` points at a
//! disposable database; without it they return early.

use sqlx::PgPool;

use connectx::backend::PgStore;

/// Connect to the database named by `DATABASE_URL`, if any
pub async fn test_pool() -> Option<PgPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to create test database pool");
    Some(pool)
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Migrated `PgStore` over the test database
pub async fn test_store() -> Option<PgStore> {
    let pool = test_pool().await?;
    run_migrations(&pool).await.expect("Failed to run migrations");
    Some(PgStore::from_pool(pool))
}
