//! Repository for the `books` table.
//!
//! Every method returns [`BookDetail`], so each statement joins the
//! affected book rows against `authors` and `categories`. Writes use a
//! data-modifying CTE named `b`, which keeps the mutation and the joined
//! read in one atomic statement.

use catalog_core::search::{non_empty, substring_pattern};
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{BookDetail, BookDetailRow, BookListParams, CreateBook, UpdateBook};

/// Joined column list; expects the book rows aliased as `b`.
const DETAIL_COLUMNS: &str = "\
    b.id, b.title, b.author_id, b.category_id, b.available, \
    b.created_at, b.updated_at, \
    a.name AS author_name, a.biography AS author_biography, \
    a.created_at AS author_created_at, a.updated_at AS author_updated_at, \
    c.name AS category_name, c.description AS category_description, \
    c.created_at AS category_created_at, c.updated_at AS category_updated_at";

/// Join clause attaching the author and category to `b`.
const DETAIL_JOINS: &str = "\
    JOIN authors a ON a.id = b.author_id \
    JOIN categories c ON c.id = b.category_id";

/// Provides CRUD and filtered listing for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning it with author and category attached.
    ///
    /// Fails with a foreign key violation if `author_id` or `category_id`
    /// does not reference an existing row.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<BookDetail, sqlx::Error> {
        let query = format!(
            "WITH b AS (\
                INSERT INTO books (title, author_id, category_id, available) \
                VALUES ($1, $2, $3, $4) \
                RETURNING *\
             ) \
             SELECT {DETAIL_COLUMNS} FROM b {DETAIL_JOINS}"
        );
        let row = sqlx::query_as::<_, BookDetailRow>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(input.available)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a book by its ID, with author and category attached.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BookDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM books b {DETAIL_JOINS} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BookDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List books matching every supplied filter, in ascending id order.
    ///
    /// `author` and `category` match against the joined author and
    /// category names. Empty text filters are ignored.
    pub async fn list(
        pool: &PgPool,
        params: &BookListParams,
    ) -> Result<Vec<BookDetail>, sqlx::Error> {
        let (limit, offset) = params.page().bounds();
        let title = non_empty(params.title.as_deref());
        let author = non_empty(params.author.as_deref());
        let category = non_empty(params.category.as_deref());

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if title.is_some() {
            conditions.push(format!("b.title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if author.is_some() {
            conditions.push(format!("a.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if category.is_some() {
            conditions.push(format!("c.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if params.available.is_some() {
            conditions.push(format!("b.available = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {DETAIL_COLUMNS} \
             FROM books b {DETAIL_JOINS} \
             {where_clause} \
             ORDER BY b.id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, BookDetailRow>(&query);

        // Bind dynamic parameters in order.
        if let Some(title) = title {
            q = q.bind(substring_pattern(title));
        }
        if let Some(author) = author {
            q = q.bind(substring_pattern(author));
        }
        if let Some(category) = category {
            q = q.bind(substring_pattern(category));
        }
        if let Some(available) = params.available {
            q = q.bind(available);
        }

        let rows = q.bind(limit).bind(offset).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Replace every writable field of a book.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is
    /// written in that case.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<BookDetail>, sqlx::Error> {
        let query = format!(
            "WITH b AS (\
                UPDATE books SET \
                    title = $2, \
                    author_id = $3, \
                    category_id = $4, \
                    available = $5 \
                WHERE id = $1 \
                RETURNING *\
             ) \
             SELECT {DETAIL_COLUMNS} FROM b {DETAIL_JOINS}"
        );
        let row = sqlx::query_as::<_, BookDetailRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(input.category_id)
            .bind(input.available)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Permanently delete a book, returning it as it was immediately
    /// before deletion.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<BookDetail>, sqlx::Error> {
        let query = format!(
            "WITH b AS (DELETE FROM books WHERE id = $1 RETURNING *) \
             SELECT {DETAIL_COLUMNS} FROM b {DETAIL_JOINS}"
        );
        let row = sqlx::query_as::<_, BookDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }
}
