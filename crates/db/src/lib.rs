//! Storage layer for the book catalog: connection pool, migrations,
//! row models and per-entity repositories.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod status;

pub use error::{constraint_violation, ConstraintViolation};
pub use status::{catalog_status, CatalogStatus};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Each request checks a connection out of this pool for the duration of a
/// single statement; the connection returns to the pool when the query
/// future completes or is dropped.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
///
/// Already-applied migrations are skipped, so this is safe to run on every
/// start.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
