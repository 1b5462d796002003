use serde_json::Value;

use crate::domain::config::ValidationLimits;

use super::field::validate_fields;
use super::{Scope, SchemaViolation, schema};

/// Deepest non-string `id` rendered as JSON text in a label.
const MAX_LABEL_NESTING: usize = 128;

/// Label used to prefix a rule set's messages: its `id`, or `Rule #<index>`.
pub fn rule_set_label(index: usize, rule_set: &Value) -> String {
    match rule_set.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) if nests_within(other, MAX_LABEL_NESTING) => other.to_string(),
        _ => format!("Rule #{index}"),
    }
}

// Serializing recurses per level, so only bounded ids are rendered.
fn nests_within(value: &Value, limit: usize) -> bool {
    let mut pending = vec![(value, 0)];
    while let Some((value, depth)) = pending.pop() {
        if depth > limit {
            return false;
        }
        match value {
            Value::Array(items) => pending.extend(items.iter().map(|item| (item, depth + 1))),
            Value::Object(fields) => pending.extend(fields.values().map(|item| (item, depth + 1))),
            _ => {}
        }
    }
    true
}

/// Validates one rule set's top-level fields, descending into `rule` and `actions`.
pub fn validate_rule_set(
    index: usize,
    rule_set: &Value,
    limits: ValidationLimits,
) -> Vec<SchemaViolation> {
    let label = rule_set_label(index, rule_set);
    let scope = Scope::new(&label, limits);
    let violations = validate_fields(scope, schema::MAIN_FIELDS, rule_set.as_object());
    tracing::debug!(
        rule_set = %label,
        index,
        errors = violations.len(),
        "rule set validated"
    );
    violations
}

/// Validates every rule set independently and concatenates violations in input order.
pub fn validate_rule_sets(rule_sets: &[Value], limits: ValidationLimits) -> Vec<SchemaViolation> {
    rule_sets
        .iter()
        .enumerate()
        .flat_map(|(index, rule_set)| validate_rule_set(index, rule_set, limits))
        .collect()
}
