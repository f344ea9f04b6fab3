use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid payload: {} offending field(s)", .0.len())]
    InvalidPayload(Vec<FieldViolation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Names of the offending fields for payload failures, empty otherwise.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            CoreError::InvalidPayload(violations) => {
                let mut names: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                names.dedup();
                names
            }
            _ => Vec::new(),
        }
    }
}
