//! Static schema tables for rule-set documents.
//!
//! Table order is significant: fields are checked, and their violations
//! reported, in the order they appear here.

use serde_json::{Map, Value, json};

use crate::domain::rules::{ConditionSpec, FieldSpec, NestedValidator, ValueKind};

const STRING: &[ValueKind] = &[ValueKind::String];
const NUMBER: &[ValueKind] = &[ValueKind::Number];
const OBJECT: &[ValueKind] = &[ValueKind::Object];
const ARRAY: &[ValueKind] = &[ValueKind::Array];
const STRING_OR_NUMBER: &[ValueKind] = &[ValueKind::String, ValueKind::Number];

/// Top-level fields of one rule set. Unlisted keys are ignored.
pub static MAIN_FIELDS: &[(&str, FieldSpec)] = &[
    ("id", FieldSpec::optional(STRING)),
    ("description", FieldSpec::optional(STRING)),
    (
        "rule",
        FieldSpec::required(OBJECT).with_validator(NestedValidator::RuleTree),
    ),
    (
        "actions",
        FieldSpec::optional(ARRAY).with_validator(NestedValidator::ActionList),
    ),
];

/// Fields of a leaf (condition) node.
pub static RULE_FIELDS: &[(&str, FieldSpec)] = &[
    (
        "condition",
        FieldSpec::required(STRING).with_validator(NestedValidator::Condition),
    ),
    ("property", FieldSpec::required(STRING)),
];

/// Reserved keys that make a node a combinator, in walk order.
pub static COMBINATOR_FIELDS: &[(&str, FieldSpec)] = &[
    ("if", FieldSpec::optional(OBJECT)),
    ("then", FieldSpec::optional(OBJECT)),
    ("and", FieldSpec::optional(ARRAY)),
    ("or", FieldSpec::optional(ARRAY)),
];

/// Recognized action keys. Unlisted keys are rejected.
pub static ACTION_FIELDS: &[(&str, FieldSpec)] = &[
    (
        "callOnTrue",
        FieldSpec::optional(STRING).with_additional_fields(&["args"]),
    ),
    (
        "callOnFalse",
        FieldSpec::optional(STRING).with_additional_fields(&["args"]),
    ),
    ("args", FieldSpec::optional(ARRAY)),
    ("returnOnTrue", FieldSpec::optional(STRING)),
    ("returnOnFalse", FieldSpec::optional(STRING)),
];

/// Condition-specific extra fields.
pub static ADDITIONAL_FIELDS: &[(&str, FieldSpec)] = &[
    ("value", FieldSpec::required(STRING_OR_NUMBER)),
    ("values", FieldSpec::required(ARRAY)),
    ("start", FieldSpec::required(NUMBER)),
    ("end", FieldSpec::required(NUMBER)),
    ("function", FieldSpec::required(STRING)),
];

const fn condition(name: &'static str, additional_fields: &'static [&'static str]) -> ConditionSpec {
    ConditionSpec {
        name,
        additional_fields,
    }
}

pub static CONDITIONS: &[ConditionSpec] = &[
    condition("call", &["function"]),
    condition("email_address", &[]),
    condition("zipcode", &[]),
    condition("yyyy_mm_dd_hh_mm_ss", &[]),
    condition("yyyy_mm_dd_hh_mm", &[]),
    condition("yyyy_mm_dd", &[]),
    condition("mm_dd_yyyy", &[]),
    condition("yyyy", &[]),
    condition("hh_mm", &[]),
    condition("hh_mm_ss", &[]),
    condition("matches_regex", &["value"]),
    condition("is_integer", &[]),
    condition("is_float", &[]),
    condition("equal", &["value"]),
    condition("not_equal", &["value"]),
    condition("greater_than", &["value"]),
    condition("less_than", &["value"]),
    condition("greater_than_or_equal", &["value"]),
    condition("less_than_or_equal", &["value"]),
    condition("equal_property", &["value"]),
    condition("not_equal_property", &["value"]),
    condition("greater_than_property", &["value"]),
    condition("less_than_property", &["value"]),
    condition("greater_than_or_equal_property", &["value"]),
    condition("less_than_or_equal_property", &["value"]),
    condition("between", &["start", "end"]),
    condition("starts_with", &["value"]),
    condition("ends_with", &["value"]),
    condition("contains", &["value"]),
    condition("not_empty", &[]),
    condition("is_empty", &[]),
    condition("is_true", &[]),
    condition("is_false", &[]),
    condition("in", &["values"]),
    condition("not_in", &["values"]),
    condition("does_not_contain", &["value"]),
    condition("includes_all", &["values"]),
    condition("includes_none", &["values"]),
];

pub fn condition_spec(name: &str) -> Option<&'static ConditionSpec> {
    CONDITIONS.iter().find(|spec| spec.name == name)
}

pub fn action_field(key: &str) -> Option<&'static FieldSpec> {
    lookup(ACTION_FIELDS, key)
}

pub fn additional_field(name: &str) -> Option<&'static FieldSpec> {
    lookup(ADDITIONAL_FIELDS, name)
}

fn lookup(table: &'static [(&'static str, FieldSpec)], name: &str) -> Option<&'static FieldSpec> {
    table
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, spec)| spec)
}

/// All tables as one JSON document, in table order.
pub fn tables_json() -> Value {
    let conditions: Map<String, Value> = CONDITIONS
        .iter()
        .map(|spec| (spec.name.to_string(), json!(spec.additional_fields)))
        .collect();
    json!({
        "main_fields": table_json(MAIN_FIELDS),
        "rule_fields": table_json(RULE_FIELDS),
        "combinator_fields": table_json(COMBINATOR_FIELDS),
        "action_fields": table_json(ACTION_FIELDS),
        "additional_fields": table_json(ADDITIONAL_FIELDS),
        "conditions": conditions,
    })
}

fn table_json(table: &[(&str, FieldSpec)]) -> Value {
    Value::Object(
        table
            .iter()
            .map(|(name, spec)| (name.to_string(), json!(spec)))
            .collect(),
    )
}
