//! Rule evaluator: pure logic, no database access.

use serde_json::Value;

use super::rules::{FieldRule, FieldType, FieldViolation, RuleKind, ValidationResult};
use crate::error::CoreError;

/// Evaluate all rules against a single JSON object.
pub fn evaluate_rules(rules: &[FieldRule], data: &serde_json::Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data.get(rule.field)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Check a raw request body against `rules`.
///
/// Anything other than a JSON object is reported against the pseudo-field
/// `body`.
pub fn validate_payload(rules: &[FieldRule], body: &Value) -> Result<(), CoreError> {
    let Some(data) = body.as_object() else {
        return Err(body_violation("request body must be a JSON object"));
    };

    let result = evaluate_rules(rules, data);
    if result.is_valid {
        Ok(())
    } else {
        Err(CoreError::InvalidPayload(result.errors))
    }
}

/// A payload failure reported against the whole body rather than a field,
/// e.g. unparseable JSON or a missing JSON content type.
pub fn body_violation(message: impl Into<String>) -> CoreError {
    CoreError::InvalidPayload(vec![FieldViolation {
        field: "body".to_string(),
        rule_type: RuleKind::TypeCheck(FieldType::Object).name().to_string(),
        message: message.into(),
        value: None,
    }])
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match rule.kind {
        RuleKind::Required => evaluate_required(rule, value),
        RuleKind::TypeCheck(expected) => evaluate_type_check(rule, expected, value),
        RuleKind::MaxLength(max) => evaluate_max_length(rule, max, value),
    }
}

fn violation(rule: &FieldRule, message: String, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule_type: rule.kind.name().to_string(),
        message,
        value: value.cloned(),
    }
}

fn evaluate_required(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(
            rule,
            format!("{} is required", rule.field),
            None,
        )),
        Some(Value::String(s)) if s.trim().is_empty() => Some(violation(
            rule,
            format!("{} must not be empty", rule.field),
            value,
        )),
        _ => None,
    }
}

fn evaluate_type_check(
    rule: &FieldRule,
    expected: FieldType,
    value: Option<&Value>,
) -> Option<FieldViolation> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return None, // type_check doesn't enforce presence
    };
    let matches = match expected {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Object => value.is_object(),
    };
    if matches {
        None
    } else {
        Some(violation(
            rule,
            format!("{} must be of type {}", rule.field, expected.as_str()),
            Some(value),
        ))
    }
}

fn evaluate_max_length(rule: &FieldRule, max: usize, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    if s.chars().count() > max {
        Some(violation(
            rule,
            format!("{} must be at most {max} characters", rule.field),
            None,
        ))
    } else {
        None
    }
}
