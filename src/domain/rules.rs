use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kind a schema field may declare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Structural kind of a decoded value. `null` has no kind.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(_) => Some(Self::Number),
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::Array),
            Value::Object(_) => Some(Self::Object),
        }
    }
}

/// Name used for a value's kind in messages, including `null`.
pub fn kind_name(value: &Value) -> &'static str {
    ValueKind::of(value).map_or("null", |kind| kind.as_str())
}

/// Nested validation run on a field once it is present and correctly typed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NestedValidator {
    /// Walks the value as a rule tree.
    RuleTree,
    /// Checks every action object of the value.
    ActionList,
    /// Resolves the containing node's condition against the registry.
    Condition,
}

/// One entry of a schema table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub required: bool,
    /// Allowed kinds. Empty means the field is not type-checked.
    pub kinds: &'static [ValueKind],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<NestedValidator>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub additional_fields: &'static [&'static str],
}

impl FieldSpec {
    pub const fn optional(kinds: &'static [ValueKind]) -> Self {
        Self {
            required: false,
            kinds,
            validate: None,
            additional_fields: &[],
        }
    }

    pub const fn required(kinds: &'static [ValueKind]) -> Self {
        Self {
            required: true,
            kinds,
            validate: None,
            additional_fields: &[],
        }
    }

    pub const fn with_validator(mut self, validator: NestedValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub const fn with_additional_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.additional_fields = fields;
        self
    }

    pub fn accepts(&self, value: &Value) -> bool {
        if self.kinds.is_empty() {
            return true;
        }
        ValueKind::of(value).is_some_and(|kind| self.kinds.contains(&kind))
    }

    /// Allowed kinds joined the way type-mismatch messages print them.
    pub fn expected_kinds(&self) -> String {
        self.kinds
            .iter()
            .map(ValueKind::as_str)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Registry entry: a condition name and the additional fields it requires.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ConditionSpec {
    pub name: &'static str,
    pub additional_fields: &'static [&'static str],
}

/// Verdict for one validated document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self {
                valid: true,
                errors: None,
                critical: None,
            }
        } else {
            Self {
                valid: false,
                errors: Some(errors),
                critical: None,
            }
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: None,
            critical: Some(message.into()),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.critical.is_some()
    }
}
