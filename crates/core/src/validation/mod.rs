//! Payload validation.
//!
//! Each create/update payload declares a static list of [`FieldRule`]s.
//! The evaluator checks them against the raw JSON object so every
//! offending field is reported at once, before the payload is
//! deserialized or any storage is touched.

pub mod evaluator;
pub mod rules;

pub use evaluator::{body_violation, evaluate_rules, validate_payload};
pub use rules::{FieldRule, FieldType, FieldViolation, PayloadContract, RuleKind, ValidationResult};
