use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported {kind} file extension: {path}")]
    UnsupportedPathExtension { kind: &'static str, path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("non-finite number: {number}")]
    NonFiniteNumber { number: String },

    #[error("yaml conversion error: {0}")]
    YamlConvert(#[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
