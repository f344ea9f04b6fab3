//! Classification of storage-level integrity failures.

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for check constraint violations.
const CHECK_VIOLATION: &str = "23514";

/// A storage-level integrity rule rejected a write.
///
/// Each variant carries the constraint name from the schema
/// (e.g. `uq_categories_name`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("Duplicate value violates unique constraint: {constraint}")]
    Unique { constraint: String },

    #[error("Missing or still-referenced row violates foreign key constraint: {constraint}")]
    ForeignKey { constraint: String },

    #[error("Value violates check constraint: {constraint}")]
    Check { constraint: String },
}

impl ConstraintViolation {
    /// Name of the violated constraint.
    pub fn constraint(&self) -> &str {
        match self {
            Self::Unique { constraint }
            | Self::ForeignKey { constraint }
            | Self::Check { constraint } => constraint,
        }
    }
}

/// Classify a sqlx error as a constraint violation, if it is one.
///
/// Returns `None` for every other kind of failure (connection loss, row not
/// found, syntax errors, ...).
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_err = err.as_database_error()?;
    let constraint = db_err.constraint().unwrap_or("unknown").to_string();
    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => Some(ConstraintViolation::Unique { constraint }),
        Some(FOREIGN_KEY_VIOLATION) => Some(ConstraintViolation::ForeignKey { constraint }),
        Some(CHECK_VIOLATION) => Some(ConstraintViolation::Check { constraint }),
        _ => None,
    }
}
