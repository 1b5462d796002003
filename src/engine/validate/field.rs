use serde_json::{Map, Value};

use crate::domain::rules::{FieldSpec, NestedValidator, kind_name};

use super::{Scope, SchemaViolation, action, condition, tree};

/// Reports a mismatch when `value`'s kind is not one `spec` allows.
pub fn check_type(
    scope: Scope<'_>,
    name: &str,
    spec: &FieldSpec,
    value: &Value,
) -> Option<SchemaViolation> {
    if spec.accepts(value) {
        return None;
    }
    Some(SchemaViolation::TypeMismatch {
        label: scope.label.to_string(),
        field: name.to_string(),
        expected: spec.expected_kinds(),
        actual: kind_name(value),
    })
}

/// Checks one field of `container`: presence, then type, then nested validation.
///
/// A value of the wrong kind never reaches the nested validator. A
/// `container` of `None` stands for a node that is not an object and so
/// has no fields at all.
pub fn validate_field(
    scope: Scope<'_>,
    name: &str,
    spec: &FieldSpec,
    container: Option<&Map<String, Value>>,
) -> Vec<SchemaViolation> {
    let Some((fields, value)) =
        container.and_then(|fields| fields.get(name).map(|value| (fields, value)))
    else {
        if spec.required {
            return vec![SchemaViolation::MissingField {
                label: scope.label.to_string(),
                field: name.to_string(),
            }];
        }
        return Vec::new();
    };

    if let Some(mismatch) = check_type(scope, name, spec, value) {
        return vec![mismatch];
    }

    match spec.validate {
        Some(validator) => run_nested(scope, validator, value, fields),
        None => Vec::new(),
    }
}

/// Checks every field of a schema table against `container`, in table order.
pub fn validate_fields(
    scope: Scope<'_>,
    table: &[(&str, FieldSpec)],
    container: Option<&Map<String, Value>>,
) -> Vec<SchemaViolation> {
    table
        .iter()
        .flat_map(|(name, spec)| validate_field(scope, name, spec, container))
        .collect()
}

fn run_nested(
    scope: Scope<'_>,
    validator: NestedValidator,
    value: &Value,
    container: &Map<String, Value>,
) -> Vec<SchemaViolation> {
    match validator {
        NestedValidator::RuleTree => tree::validate_rule(scope, value),
        NestedValidator::ActionList => action::validate_actions(scope, value),
        NestedValidator::Condition => condition::validate_condition(scope, container),
    }
}
