//! Category entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{FieldRule, FieldType, PayloadContract};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest accepted category name, in characters.
pub const MAX_NAME_LEN: usize = 255;

const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::of_type("name", FieldType::String),
    FieldRule::max_length("name", MAX_NAME_LEN),
    FieldRule::of_type("description", FieldType::String),
];

/// A category row from the `categories` table. `name` is unique.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

impl PayloadContract for CreateCategory {
    const RULES: &'static [FieldRule] = CATEGORY_RULES;
}

/// DTO for updating a category. Both fields are written.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
}

impl PayloadContract for UpdateCategory {
    const RULES: &'static [FieldRule] = CATEGORY_RULES;
}
