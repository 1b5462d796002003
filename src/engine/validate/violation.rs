use thiserror::Error;

use crate::io::IoError;

/// Accumulated schema violation. `Display` renders the reported message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("{label} missing required field: {field}")]
    MissingField { label: String, field: String },

    #[error("{label}: Type for field {field}, was expected to be {expected}, not {actual}")]
    TypeMismatch {
        label: String,
        field: String,
        expected: String,
        actual: &'static str,
    },

    #[error("{label} does not have valid condition specified: {condition}")]
    UnknownCondition { label: String, condition: String },

    #[error("{label} invalid action specified: {key}")]
    UnknownAction { label: String, key: String },

    #[error("{label} missing required additional field for {condition}: {field}")]
    MissingAdditionalField {
        label: String,
        condition: String,
        field: String,
    },

    #[error("{label} rule is too deeply nested: maximum depth is {max_depth}")]
    TooDeep { label: String, max_depth: usize },
}

/// Document-level failure. Aborts validation with a single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriticalError {
    #[error("Invalid data - Not a string")]
    NotText,

    #[error("Invalid JSON - {0}")]
    InvalidJson(String),

    #[error("Invalid YAML - {0}")]
    InvalidYaml(String),

    #[error("Invalid brij JSON - not an object: got instead: {0}")]
    NotAggregate(&'static str),

    #[error("Invalid brij JSON - not an array")]
    NotArray,
}

impl From<IoError> for CriticalError {
    fn from(error: IoError) -> Self {
        match error {
            IoError::YamlParse(source) => Self::InvalidYaml(source.to_string()),
            IoError::YamlConvert(source) => Self::InvalidYaml(source.to_string()),
            error @ IoError::NonFiniteNumber { .. } => Self::InvalidYaml(error.to_string()),
            IoError::JsonParse(source) => Self::InvalidJson(source.to_string()),
            other => Self::InvalidJson(other.to_string()),
        }
    }
}
