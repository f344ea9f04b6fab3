//! Repository for the `authors` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};
use crate::models::pagination::PageParams;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, biography, created_at, updated_at";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, biography)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.biography)
            .fetch_one(pool)
            .await
    }

    /// Find an author by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List authors in ascending id order.
    pub async fn list(pool: &PgPool, page: &PageParams) -> Result<Vec<Author>, sqlx::Error> {
        let (limit, offset) = page.bounds();
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Author>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite an author's name and biography.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET name = $2, biography = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.biography)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an author, returning the row as it was.
    ///
    /// Fails with a foreign key violation while any book still references
    /// the author.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("DELETE FROM authors WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
