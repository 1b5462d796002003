use serde_json::Value;

use crate::domain::rules::{ValueKind, kind_name};

use super::field::check_type;
use super::{Scope, SchemaViolation, schema};

/// Checks each action object's keys against the action table.
///
/// Only the types of present keys are checked; nothing in an action is
/// required. Keys are reported in document order.
pub fn validate_actions(scope: Scope<'_>, actions: &Value) -> Vec<SchemaViolation> {
    let Some(actions) = actions.as_array() else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    for (index, action) in actions.iter().enumerate() {
        let Some(fields) = action.as_object() else {
            violations.push(SchemaViolation::TypeMismatch {
                label: scope.label.to_string(),
                field: format!("actions[{index}]"),
                expected: ValueKind::Object.as_str().to_string(),
                actual: kind_name(action),
            });
            continue;
        };

        for (key, value) in fields {
            match schema::action_field(key) {
                Some(spec) => violations.extend(check_type(scope, key, spec, value)),
                None => violations.push(SchemaViolation::UnknownAction {
                    label: scope.label.to_string(),
                    key: key.clone(),
                }),
            }
        }
    }
    violations
}
