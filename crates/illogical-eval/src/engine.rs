//! Evaluation engine
//!
//! This module provides the [`Evaluator`] that evaluates and simplifies a
//! parsed node tree against a flattened context, and the [`Evaluable`]
//! trait exposing the same operations on [`Node`] directly.

use crate::context::EvaluationContext;
use crate::error::EvalResult;
use illogical_ast::{DEFAULT_MAX_DEPTH, Node};
use illogical_types::{FlattenedContext, TypeCoercer, Value};
use serde_json::Value as JsonValue;
use std::fmt;

/// Result of simplifying a node: either a fully resolved value or the
/// remaining tree.
#[derive(Debug, Clone)]
pub enum Simplified {
    Value(Value),
    Node(Node),
}

impl Simplified {
    /// Check if the node resolved to a value
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Value(_) => None,
        }
    }

    /// Resolved value as data, or the remainder in its raw form
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Value(value) => value.to_json(),
            Self::Node(node) => node.serialize(),
        }
    }
}

impl fmt::Display for Simplified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", value),
            Self::Node(node) => write!(f, "{}", node),
        }
    }
}

/// The evaluation engine
#[derive(Debug, Clone)]
pub struct Evaluator {
    max_depth: usize,
    pub(crate) coercer: TypeCoercer,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an evaluator refusing trees nested deeper than `max_depth`
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            coercer: TypeCoercer::new(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluate a node. The first error aborts the whole evaluation.
    pub fn evaluate(&self, node: &Node, data: &FlattenedContext) -> EvalResult<Value> {
        let mut ctx = EvaluationContext::new(data);
        self.eval_node(node, &mut ctx)
    }

    /// Partially evaluate a node. Never fails: anything that cannot be
    /// resolved yet stays in the returned tree.
    pub fn simplify(&self, node: &Node, data: &FlattenedContext) -> Simplified {
        let mut ctx = EvaluationContext::new(data);
        self.simplify_node(node, &mut ctx)
    }

    pub(crate) fn eval_node(&self, node: &Node, ctx: &mut EvaluationContext) -> EvalResult<Value> {
        ctx.enter(self.max_depth)?;
        let result = match node {
            Node::Value(literal) => Ok(literal.to_value()),
            Node::Reference(reference) => self.eval_reference(reference, ctx),
            Node::Collection(collection) => self.eval_collection(collection, ctx),
            Node::Comparison(comparison) => self.eval_comparison(comparison, ctx),
            Node::Logical(logical) => self.eval_logical(logical, ctx),
        };
        ctx.exit();
        result
    }

    pub(crate) fn simplify_node(&self, node: &Node, ctx: &mut EvaluationContext) -> Simplified {
        if ctx.enter(self.max_depth).is_err() {
            return Simplified::Node(node.clone());
        }
        let result = match node {
            Node::Value(literal) => Simplified::Value(literal.to_value()),
            Node::Reference(reference) => self.simplify_reference(reference, ctx),
            Node::Collection(collection) => self.simplify_collection(collection, ctx),
            Node::Comparison(comparison) => self.simplify_comparison(comparison, ctx),
            Node::Logical(logical) => self.simplify_logical(logical, ctx),
        };
        ctx.exit();
        result
    }
}

/// Evaluate and simplify a parsed tree with an [`Evaluator`] bounded by
/// the depth limit the tree was parsed with
pub trait Evaluable {
    fn evaluate(&self, data: &FlattenedContext) -> EvalResult<Value>;

    fn simplify(&self, data: &FlattenedContext) -> Simplified;
}

impl Evaluable for Node {
    fn evaluate(&self, data: &FlattenedContext) -> EvalResult<Value> {
        evaluator_for(self).evaluate(self, data)
    }

    fn simplify(&self, data: &FlattenedContext) -> Simplified {
        evaluator_for(self).simplify(self, data)
    }
}

fn evaluator_for(node: &Node) -> Evaluator {
    node.options()
        .map(|options| Evaluator::with_max_depth(options.max_depth))
        .unwrap_or_default()
}
