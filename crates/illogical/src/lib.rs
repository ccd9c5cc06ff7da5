//! illogical: a boolean expression engine
//!
//! Expressions are plain data (nested JSON arrays) that can be stored,
//! transported, evaluated against a variable context, or partially
//! evaluated when only some variables are known.
//!
//! # Example
//!
//! ```ignore
//! use illogical::Illogical;
//! use serde_json::json;
//!
//! let engine = Illogical::new();
//! let expression = json!(["AND", ["==", "$a", 10], ["==", "$b", 20]]);
//!
//! // Boolean(true)
//! let value = engine.evaluate(&expression, &json!({"a": 10, "b": 20}))?;
//!
//! // ({b} == 20)
//! let remainder = engine.simplify(&expression, &json!({"a": 10}))?;
//!
//! // (({a} == 10) AND ({b} == 20))
//! let statement = engine.statement(&expression)?;
//! ```

mod config;

pub use illogical_ast as ast;
pub use illogical_diagnostics as diagnostics;
pub use illogical_eval as eval;
pub use illogical_parser as parser;
pub use illogical_types as types;

pub use config::IllogicalConfig;
pub use illogical_ast::{Node, Operator, Options};
pub use illogical_diagnostics::{IllogicalError, Result};
pub use illogical_eval::Simplified;
pub use illogical_types::Value;

use illogical_ast::{AddressFormat, AffixFormat, DEFAULT_MAX_DEPTH, IgnoredPaths, OperatorMapping};
use illogical_eval::Evaluator;
use illogical_parser::Parser;
use illogical_types::{FlattenedContext, flatten_context};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Expression engine bound to one set of [`Options`]
#[derive(Debug, Clone)]
pub struct Illogical {
    parser: Parser,
    evaluator: Evaluator,
}

impl Default for Illogical {
    fn default() -> Self {
        Self::new()
    }
}

impl Illogical {
    /// Create an engine with the default operator tokens, `$` references
    /// and `\` as escape character
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn builder() -> IllogicalBuilder {
        IllogicalBuilder::default()
    }

    pub fn with_options(options: Options) -> Self {
        let evaluator = Evaluator::with_max_depth(options.max_depth);
        Self {
            parser: Parser::new(Arc::new(options)),
            evaluator,
        }
    }

    pub fn options(&self) -> &Options {
        self.parser.options()
    }

    /// Parse a raw expression into a node tree
    pub fn parse(&self, expression: &JsonValue) -> Result<Node> {
        self.parser
            .parse(expression)
            .inspect_err(|err| log::debug!("rejected {}: {}", expression, err.report()))
    }

    /// Evaluate a raw expression against a context.
    ///
    /// A `null` context resolves no reference.
    pub fn evaluate(&self, expression: &JsonValue, context: &JsonValue) -> Result<Value> {
        let node = self.parse(expression)?;
        let data = Self::flatten(context);
        Ok(self.evaluator.evaluate(&node, &data)?)
    }

    /// Partially evaluate a raw expression. Only parsing can fail.
    pub fn simplify(&self, expression: &JsonValue, context: &JsonValue) -> Result<Simplified> {
        let node = self.parse(expression)?;
        let data = Self::flatten(context);
        Ok(self.evaluator.simplify(&node, &data))
    }

    /// Human readable form of a raw expression
    pub fn statement(&self, expression: &JsonValue) -> Result<String> {
        Ok(self.parse(expression)?.to_string())
    }

    fn flatten(context: &JsonValue) -> FlattenedContext {
        flatten_context(context).unwrap_or_default()
    }
}

/// Builder for [`Illogical`]
#[derive(Debug, Clone)]
pub struct IllogicalBuilder {
    operators: OperatorMapping,
    escape_character: String,
    address: Arc<dyn AddressFormat>,
    ignored: IgnoredPaths,
    max_depth: usize,
}

impl Default for IllogicalBuilder {
    fn default() -> Self {
        let options = Options::default();
        Self {
            operators: options.operators,
            escape_character: options.escape_character,
            address: options.reference.address,
            ignored: options.reference.ignored,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IllogicalBuilder {
    /// Use `token` to head expressions of `op`
    pub fn operator(mut self, op: impl Into<Operator>, token: impl Into<String>) -> Self {
        self.operators = self.operators.with(op, token);
        self
    }

    /// Set the collection escape character. Empty disables escaping.
    pub fn escape_character(mut self, escape: impl Into<String>) -> Self {
        self.escape_character = escape.into();
        self
    }

    /// Wrap references in `prefix` and `suffix`, e.g. `{{` and `}}`
    pub fn reference_affix(self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.address_format(AffixFormat::new(prefix, suffix))
    }

    pub fn address_format(mut self, format: impl AddressFormat + 'static) -> Self {
        self.address = Arc::new(format);
        self
    }

    /// Never resolve `path` on simplify
    pub fn ignored_path(mut self, path: impl Into<String>) -> Self {
        self.ignored = self.ignored.with_path(path);
        self
    }

    /// Never resolve paths matching `pattern` on simplify
    pub fn ignored_pattern(mut self, pattern: Regex) -> Self {
        self.ignored = self.ignored.with_pattern(pattern);
        self
    }

    /// Maximum nesting depth for both parsing and evaluation
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Illogical {
        log::debug!(
            "building engine: escape {:?}, ignored paths: {}, max depth {}",
            self.escape_character,
            !self.ignored.is_empty(),
            self.max_depth
        );
        let mut options = Options {
            operators: self.operators,
            escape_character: self.escape_character,
            max_depth: self.max_depth,
            ..Options::default()
        };
        options.reference.address = self.address;
        options.reference.ignored = self.ignored;
        Illogical::with_options(options)
    }
}
