use thiserror::Error;

use crate::io::IoError;

/// Errors produced while loading validator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape.
    #[error("failed to parse config file `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Depth limit must allow at least one combinator level.
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Errors produced by the `validate` command boundary before a verdict exists.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Input format could not be resolved from flags or input path.
    #[error("failed to resolve input format: {source}")]
    ResolveInput {
        #[source]
        source: IoError,
    },

    /// Input file could not be opened.
    #[error("failed to open input file `{path}`: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes could not be read.
    #[error("failed to read input: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Structured report could not be serialized.
    #[error("failed to serialize validation report: {source}")]
    SerializeReport {
        #[source]
        source: serde_json::Error,
    },
}
