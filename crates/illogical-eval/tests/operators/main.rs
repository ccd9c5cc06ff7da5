//! Operator tests
//!
//! Expressions are written in their raw form and parsed with the default
//! options before being evaluated.

mod comparison;
mod logical;
mod operand;

use illogical_ast::Node;
use illogical_eval::{EvalResult, Evaluator, Simplified};
use illogical_parser::Parser;
use illogical_types::{FlattenedContext, Value, flatten_context};
use serde_json::Value as JsonValue;

// ============================================================================
// Test Helpers
// ============================================================================

pub fn parse(raw: &JsonValue) -> Node {
    Parser::default()
        .parse(raw)
        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", raw, e))
}

pub fn data(ctx: &JsonValue) -> FlattenedContext {
    flatten_context(ctx).unwrap_or_default()
}

pub fn eval(raw: JsonValue, ctx: JsonValue) -> EvalResult<Value> {
    Evaluator::new().evaluate(&parse(&raw), &data(&ctx))
}

pub fn simplify(raw: JsonValue, ctx: JsonValue) -> Simplified {
    Evaluator::new().simplify(&parse(&raw), &data(&ctx))
}
