//! Author entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{FieldRule, FieldType, PayloadContract};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest accepted author name, in characters.
pub const MAX_NAME_LEN: usize = 255;

const AUTHOR_RULES: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::of_type("name", FieldType::String),
    FieldRule::max_length("name", MAX_NAME_LEN),
    FieldRule::of_type("biography", FieldType::String),
];

/// An author row from the `authors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub biography: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub biography: Option<String>,
}

impl PayloadContract for CreateAuthor {
    const RULES: &'static [FieldRule] = AUTHOR_RULES;
}

/// DTO for updating an author. Both fields are written; an omitted
/// biography clears the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAuthor {
    pub name: String,
    pub biography: Option<String>,
}

impl PayloadContract for UpdateAuthor {
    const RULES: &'static [FieldRule] = AUTHOR_RULES;
}
