use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Combinator levels allowed below a rule-set's `rule` root.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Bounds applied while walking rule trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_depth: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Settings read from an optional `brij.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidatorConfig {
    pub fn from_toml_str(text: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &display)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(max_depth) = max_depth {
            self.max_depth = max_depth;
        }
        self.check()?;
        Ok(self)
    }

    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_depth: self.max_depth,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
