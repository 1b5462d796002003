pub mod action;
pub mod condition;
pub mod field;
pub mod rule_set;
pub mod schema;
pub mod tree;
pub mod violation;

use serde_json::Value;

use crate::domain::config::ValidationLimits;
use crate::domain::rules::{ValidationReport, kind_name};
use crate::io::{Format, reader};

pub use violation::{CriticalError, SchemaViolation};

/// Context for checking one rule set: its label and the walk limits.
///
/// Passed by value through every check so that no validation state
/// outlives the rule set it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub label: &'a str,
    pub limits: ValidationLimits,
}

impl<'a> Scope<'a> {
    pub fn new(label: &'a str, limits: ValidationLimits) -> Self {
        Self { label, limits }
    }
}

/// Decodes raw input into the list of rule sets it must contain.
pub fn parse(input: &[u8], format: Format) -> Result<Vec<Value>, CriticalError> {
    let text = std::str::from_utf8(input).map_err(|_| CriticalError::NotText)?;
    parse_text(text, format)
}

pub fn parse_text(text: &str, format: Format) -> Result<Vec<Value>, CriticalError> {
    match reader::read_document(text, format)? {
        Value::Array(rule_sets) => Ok(rule_sets),
        object @ Value::Object(_) => {
            reader::release_document(object);
            Err(CriticalError::NotArray)
        }
        scalar => Err(CriticalError::NotAggregate(kind_name(&scalar))),
    }
}

/// Validates a JSON rule-set document with default limits.
pub fn validate(text: &str) -> ValidationReport {
    validate_bytes(text.as_bytes(), Format::Json, ValidationLimits::default())
}

pub fn validate_bytes(input: &[u8], format: Format, limits: ValidationLimits) -> ValidationReport {
    let rule_sets = match parse(input, format) {
        Ok(rule_sets) => rule_sets,
        Err(critical) => {
            tracing::info!(%critical, "rule-set document rejected");
            return ValidationReport::critical(critical.to_string());
        }
    };

    let violations = rule_set::validate_rule_sets(&rule_sets, limits);
    tracing::info!(
        rule_sets = rule_sets.len(),
        errors = violations.len(),
        "rule-set document validated"
    );
    reader::release_document(Value::Array(rule_sets));
    ValidationReport::from_errors(violations.iter().map(ToString::to_string).collect())
}
