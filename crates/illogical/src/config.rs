//! Serializable engine configuration
//!
//! Callers load an [`IllogicalConfig`] from wherever they keep settings and
//! hand it to [`Illogical::from_config`]. Every field is optional.
//!
//! ```json
//! {
//!   "operators": {"And": "all", "Eq": "eq"},
//!   "reference_prefix": "{{",
//!   "reference_suffix": "}}",
//!   "ignored_patterns": ["^secret\\."]
//! }
//! ```

use crate::{Illogical, IllogicalBuilder, Operator};
use illogical_ast::{DEFAULT_ESCAPE_CHARACTER, DEFAULT_MAX_DEPTH, DEFAULT_REFERENCE_PREFIX};
use illogical_diagnostics::{IL0200, IL0201, IllogicalError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IllogicalConfig {
    /// Token overrides keyed by operator name, e.g. `"Eq": "eq"`
    pub operators: BTreeMap<String, String>,
    pub escape_character: String,
    pub reference_prefix: String,
    pub reference_suffix: String,
    /// Paths simplify leaves unresolved
    pub ignored_paths: Vec<String>,
    /// Regular expressions over paths simplify leaves unresolved
    pub ignored_patterns: Vec<String>,
    pub max_depth: usize,
}

impl Default for IllogicalConfig {
    fn default() -> Self {
        Self {
            operators: BTreeMap::new(),
            escape_character: DEFAULT_ESCAPE_CHARACTER.to_string(),
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            reference_suffix: String::new(),
            ignored_paths: Vec::new(),
            ignored_patterns: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IllogicalConfig {
    /// Validate the configuration and turn it into a builder
    pub fn into_builder(self) -> Result<IllogicalBuilder> {
        let mut builder = Illogical::builder()
            .escape_character(self.escape_character)
            .reference_affix(self.reference_prefix, self.reference_suffix)
            .max_depth(self.max_depth);

        for (name, token) in self.operators {
            let op: Operator = name
                .parse()
                .map_err(|e: String| IllogicalError::configuration(IL0200, e))?;
            log::debug!("operator {} uses token {:?}", op, token);
            builder = builder.operator(op, token);
        }

        for path in self.ignored_paths {
            builder = builder.ignored_path(path);
        }

        for pattern in self.ignored_patterns {
            let regex = Regex::new(&pattern).map_err(|e| {
                IllogicalError::configuration(
                    IL0201,
                    format!("invalid ignored path pattern \"{pattern}\": {e}"),
                )
            })?;
            builder = builder.ignored_pattern(regex);
        }

        Ok(builder)
    }
}

impl Illogical {
    /// Create an engine from a loaded configuration
    pub fn from_config(config: IllogicalConfig) -> Result<Self> {
        Ok(config.into_builder()?.build())
    }
}
