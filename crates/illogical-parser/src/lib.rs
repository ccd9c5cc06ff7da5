//! illogical expression parser
//!
//! Turns the raw nested-array data form into a [`Node`] tree:
//!
//! ```text
//! ["AND", ["==", "$a", 1], ["IN", "$b", ["x", "y"]]]
//! ```
//!
//! An array headed by a known operator token is an expression, any other
//! array is a literal collection. A collection whose first element is an
//! operator token is written with the escape character, e.g.
//! `["\\==", 1, 1]`.

mod expression;

use illogical_ast::{Node, Options};
use illogical_diagnostics::Result;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Parser for raw expressions
#[derive(Debug, Clone)]
pub struct Parser {
    options: Arc<Options>,
}

impl Parser {
    /// Create a parser. Every parsed node shares `options`.
    pub fn new(options: Arc<Options>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Arc<Options> {
        &self.options
    }

    /// Parse a raw expression
    pub fn parse(&self, input: &JsonValue) -> Result<Node> {
        self.parse_at(input, 0)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Arc::new(Options::default()))
    }
}
