use serde_json::{Map, Value};

use super::field::check_type;
use super::{Scope, SchemaViolation, schema};

/// Resolves a leaf node's `condition` and checks the extra fields it requires.
///
/// Callers have already checked that `condition` is a string.
pub fn validate_condition(scope: Scope<'_>, node: &Map<String, Value>) -> Vec<SchemaViolation> {
    let Some(name) = node.get("condition").and_then(Value::as_str) else {
        return Vec::new();
    };
    let Some(condition) = schema::condition_spec(name) else {
        return vec![SchemaViolation::UnknownCondition {
            label: scope.label.to_string(),
            condition: name.to_string(),
        }];
    };

    let mut violations = Vec::new();
    for field in condition.additional_fields {
        let Some(spec) = schema::additional_field(field) else {
            continue;
        };
        match node.get(*field) {
            Some(value) => violations.extend(check_type(scope, field, spec, value)),
            None if spec.required => violations.push(SchemaViolation::MissingAdditionalField {
                label: scope.label.to_string(),
                condition: name.to_string(),
                field: field.to_string(),
            }),
            None => {}
        }
    }
    violations
}
