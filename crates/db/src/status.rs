//! Catalog readiness summary for the health endpoint.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Applied schema version and row counts, read in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CatalogStatus {
    /// Highest successfully applied migration, `None` on an empty ledger.
    pub schema_version: Option<i64>,
    pub authors: i64,
    pub categories: i64,
    pub books: i64,
}

/// Read the catalog summary.
///
/// Fails if the database is unreachable or the catalog tables have not
/// been migrated yet.
pub async fn catalog_status(pool: &PgPool) -> Result<CatalogStatus, sqlx::Error> {
    sqlx::query_as::<_, CatalogStatus>(
        "SELECT \
            (SELECT MAX(version) FROM _sqlx_migrations WHERE success) AS schema_version, \
            (SELECT COUNT(*) FROM authors) AS authors, \
            (SELECT COUNT(*) FROM categories) AS categories, \
            (SELECT COUNT(*) FROM books) AS books",
    )
    .fetch_one(pool)
    .await
}
