//! Field rule and result types.

use serde::Serialize;

/// JSON type a field must carry when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Object,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
        }
    }
}

/// What a single rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Present, not null, and not a blank string.
    Required,
    /// Of the given JSON type when present and not null.
    TypeCheck(FieldType),
    /// String no longer than the given number of characters.
    MaxLength(usize),
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::TypeCheck(_) => "type_check",
            RuleKind::MaxLength(_) => "max_length",
        }
    }
}

/// A rule bound to one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
}

impl FieldRule {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::Required,
        }
    }

    pub const fn of_type(field: &'static str, field_type: FieldType) -> Self {
        Self {
            field,
            kind: RuleKind::TypeCheck(field_type),
        }
    }

    pub const fn max_length(field: &'static str, max: usize) -> Self {
        Self {
            field,
            kind: RuleKind::MaxLength(max),
        }
    }
}

/// Implemented by every inbound payload type.
pub trait PayloadContract {
    /// Rules evaluated in order against the raw JSON object.
    const RULES: &'static [FieldRule];
}

/// Aggregated result of evaluating all rules against one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
