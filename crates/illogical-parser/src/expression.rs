//! Raw input dispatch

use crate::Parser;
use illogical_ast::{Collection, Literal, Node, Reference};
use illogical_diagnostics::{
    IL0001, IL0002, IL0003, IL0004, IL0007, IllogicalError, Result,
};
use serde_json::Value as JsonValue;

impl Parser {
    pub(crate) fn parse_at(&self, input: &JsonValue, depth: usize) -> Result<Node> {
        if depth >= self.options().max_depth {
            return Err(IllogicalError::parse(
                IL0007,
                format!(
                    "maximum nesting depth of {} exceeded",
                    self.options().max_depth
                ),
                input.to_string(),
            ));
        }

        match input {
            JsonValue::Null => Err(IllogicalError::parse(IL0001, "unexpected input", "null")),
            JsonValue::Array(items) if items.len() >= 2 => self.parse_list(input, items, depth),
            _ => self.create_operand(input, depth),
        }
    }

    /// Read a list of two or more items. Every item is parsed at most once.
    /// A list headed by an operator token with the wrong number of
    /// operands becomes a collection of the nodes already parsed.
    fn parse_list(&self, input: &JsonValue, items: &[JsonValue], depth: usize) -> Result<Node> {
        let (first, head, rest) = match items.split_first() {
            Some((first @ JsonValue::String(head), rest)) => (first, head, rest),
            _ => {
                let not_expression = IllogicalError::parse(
                    IL0003,
                    "unexpected logical expression",
                    input.to_string(),
                );
                return self.fallback_collection(input, items, depth, not_expression);
            }
        };

        if self.options().is_escaped(head) {
            let mut unescaped = items.to_vec();
            unescaped[0] = JsonValue::String(self.options().unescape(head).to_string());
            return self.create_collection(&unescaped, depth);
        }

        let Some(operator) = self.options().operators.lookup(head) else {
            let unknown =
                IllogicalError::parse(IL0003, "unexpected logical operator", head.as_str());
            return self.fallback_collection(input, items, depth, unknown);
        };

        let operands = self.create_operands(rest, depth).map_err(|err| {
            log::debug!("{} is neither an expression nor a collection ({})", input, err);
            let suppressed = err.to_string();
            err.with_context(suppressed)
        })?;

        if operator.accepts(operands.len()) {
            return operator.build(operands, self.options().clone());
        }

        log::debug!(
            "{} has the wrong number of operands for {}, reading it as a collection",
            input,
            operator
        );
        let mut nodes = Vec::with_capacity(items.len());
        nodes.push(self.parse_at(first, depth + 1)?);
        nodes.extend(operands);
        Collection::new(nodes, self.options().clone()).map(Node::from)
    }

    /// Read a list that is not headed by an operator token
    fn fallback_collection(
        &self,
        input: &JsonValue,
        items: &[JsonValue],
        depth: usize,
        not_expression: IllogicalError,
    ) -> Result<Node> {
        log::debug!(
            "{} is not an expression ({}), reading it as a collection",
            input,
            not_expression
        );
        self.create_collection(items, depth).map_err(|collection_error| {
            log::debug!("{} is not a collection either ({})", input, collection_error);
            collection_error.with_context(not_expression.to_string())
        })
    }

    fn create_operands(&self, items: &[JsonValue], depth: usize) -> Result<Vec<Node>> {
        items
            .iter()
            .map(|item| self.parse_at(item, depth + 1))
            .collect()
    }

    fn create_operand(&self, input: &JsonValue, depth: usize) -> Result<Node> {
        match input {
            JsonValue::Array(items) => self.create_collection(items, depth),
            JsonValue::String(raw) => match self.options().reference.address.strip(raw) {
                Some(address) => Reference::new(address, self.options().clone()).map(Node::from),
                None => Ok(Node::Value(Literal::String(raw.clone()))),
            },
            other => Literal::from_json(other).map(Node::Value).ok_or_else(|| {
                IllogicalError::parse(
                    IL0004,
                    format!("invalid operand, {}", other),
                    other.to_string(),
                )
            }),
        }
    }

    fn create_collection(&self, items: &[JsonValue], depth: usize) -> Result<Node> {
        if items.is_empty() {
            return Err(IllogicalError::parse(IL0002, "invalid undefined operand", "[]"));
        }
        let nodes = self.create_operands(items, depth)?;
        Collection::new(nodes, self.options().clone()).map(Node::from)
    }
}
