//! Book entity model, the hydrated read model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{FieldRule, FieldType, PayloadContract};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::models::author::Author;
use crate::models::category::Category;
use crate::models::pagination::PageParams;

/// Longest accepted book title, in characters.
pub const MAX_TITLE_LEN: usize = 255;

const BOOK_RULES: &[FieldRule] = &[
    FieldRule::required("title"),
    FieldRule::of_type("title", FieldType::String),
    FieldRule::max_length("title", MAX_TITLE_LEN),
    FieldRule::required("author_id"),
    FieldRule::of_type("author_id", FieldType::Integer),
    FieldRule::required("category_id"),
    FieldRule::of_type("category_id", FieldType::Integer),
    FieldRule::of_type("available", FieldType::Boolean),
];

fn default_available() -> bool {
    true
}

/// An explicit `null` for `available` means the same as leaving it out.
fn available_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_available))
}

// ---------------------------------------------------------------------------
// Read models
// ---------------------------------------------------------------------------

/// A book with its author and category attached.
///
/// This is what every book operation returns; it is built from a single
/// joined read, never from lazy follow-up queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDetail {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub category_id: DbId,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author: Author,
    pub category: Category,
}

/// Flat row produced by the `books ⋈ authors ⋈ categories` join.
#[derive(Debug, FromRow)]
pub struct BookDetailRow {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub category_id: DbId,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_name: String,
    pub author_biography: Option<String>,
    pub author_created_at: Timestamp,
    pub author_updated_at: Timestamp,
    pub category_name: String,
    pub category_description: Option<String>,
    pub category_created_at: Timestamp,
    pub category_updated_at: Timestamp,
}

impl From<BookDetailRow> for BookDetail {
    fn from(row: BookDetailRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author_id: row.author_id,
            category_id: row.category_id,
            available: row.available,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author: Author {
                id: row.author_id,
                name: row.author_name,
                biography: row.author_biography,
                created_at: row.author_created_at,
                updated_at: row.author_updated_at,
            },
            category: Category {
                id: row.category_id,
                name: row.category_name,
                description: row.category_description,
                created_at: row.category_created_at,
                updated_at: row.category_updated_at,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new book. `available` defaults to `true` when absent
/// or null.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author_id: DbId,
    pub category_id: DbId,
    #[serde(default = "default_available", deserialize_with = "available_or_default")]
    pub available: bool,
}

impl PayloadContract for CreateBook {
    const RULES: &'static [FieldRule] = BOOK_RULES;
}

/// DTO for replacing a book. Every field is written, so callers must
/// resend values they do not intend to change; an omitted or null
/// `available` resets to `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author_id: DbId,
    pub category_id: DbId,
    #[serde(default = "default_available", deserialize_with = "available_or_default")]
    pub available: bool,
}

impl PayloadContract for UpdateBook {
    const RULES: &'static [FieldRule] = BOOK_RULES;
}

/// Query parameters for listing books. All filters are optional and
/// combined with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookListParams {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive substring of the author's name.
    pub author: Option<String>,
    /// Case-insensitive substring of the category's name.
    pub category: Option<String>,
    /// Exact availability match.
    pub available: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl BookListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn available_defaults_when_absent_or_null() {
        let absent: CreateBook =
            serde_json::from_value(json!({"title": "T", "author_id": 1, "category_id": 2})).unwrap();
        assert!(absent.available);

        let null: UpdateBook = serde_json::from_value(
            json!({"title": "T", "author_id": 1, "category_id": 2, "available": null}),
        )
        .unwrap();
        assert!(null.available);

        let explicit: CreateBook = serde_json::from_value(
            json!({"title": "T", "author_id": 1, "category_id": 2, "available": false}),
        )
        .unwrap();
        assert!(!explicit.available);
    }
}
