//! Options captured by every node at parse time

use crate::OperatorMapping;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Character marking a literal collection whose head is an operator token
pub const DEFAULT_ESCAPE_CHARACTER: &str = "\\";

/// Prefix marking a string operand as a reference
pub const DEFAULT_REFERENCE_PREFIX: &str = "$";

/// Maximum nesting of raw expressions and node trees
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Converts between raw reference strings and reference addresses.
pub trait AddressFormat: fmt::Debug + Send + Sync {
    /// Extract the address from a raw string, `None` if the string is not
    /// a reference.
    fn strip(&self, raw: &str) -> Option<String>;

    /// Render an address back to its raw form
    fn render(&self, address: &str) -> String;
}

/// Address wrapped in a fixed prefix and suffix, e.g. `$user.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixFormat {
    prefix: String,
    suffix: String,
}

impl AffixFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for AffixFormat {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PREFIX, "")
    }
}

impl AddressFormat for AffixFormat {
    fn strip(&self, raw: &str) -> Option<String> {
        if raw.len() <= self.prefix.len() + self.suffix.len() {
            return None;
        }
        raw.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
            .map(str::to_string)
    }

    fn render(&self, address: &str) -> String {
        format!("{}{}{}", self.prefix, address, self.suffix)
    }
}

/// Reference paths that simplify never resolves
#[derive(Debug, Clone, Default)]
pub struct IgnoredPaths {
    paths: Vec<String>,
    patterns: Vec<Regex>,
}

impl IgnoredPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore an exact path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Ignore every path matching a pattern
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path) || self.patterns.iter().any(|re| re.is_match(path))
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.patterns.is_empty()
    }
}

/// Reference parsing, rendering and simplification options
#[derive(Debug, Clone)]
pub struct ReferenceOptions {
    pub address: Arc<dyn AddressFormat>,
    pub ignored: IgnoredPaths,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            address: Arc::new(AffixFormat::default()),
            ignored: IgnoredPaths::default(),
        }
    }
}

/// Engine options.
///
/// Built once and shared by every node through an `Arc`.
#[derive(Debug, Clone)]
pub struct Options {
    pub operators: OperatorMapping,
    pub reference: ReferenceOptions,
    /// Empty disables escaping
    pub escape_character: String,
    pub max_depth: usize,
}

impl Options {
    /// Check if a collection head carries the escape character
    pub fn is_escaped(&self, head: &str) -> bool {
        !self.escape_character.is_empty() && head.starts_with(self.escape_character.as_str())
    }

    /// Remove the escape character from a collection head
    pub fn unescape<'a>(&self, head: &'a str) -> &'a str {
        if self.is_escaped(head) {
            &head[self.escape_character.len()..]
        } else {
            head
        }
    }

    /// Prefix a collection head with the escape character
    pub fn escape(&self, head: &str) -> String {
        format!("{}{}", self.escape_character, head)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            operators: OperatorMapping::default(),
            reference: ReferenceOptions::default(),
            escape_character: DEFAULT_ESCAPE_CHARACTER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
