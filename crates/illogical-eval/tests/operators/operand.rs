//! Reference and Collection Tests
//!
//! Tests for: lookup, interpolation, type casting, ignored paths,
//! collections and the evaluation depth limit

use super::{data, eval, parse, simplify};
use illogical_ast::{IgnoredPaths, Options, ReferenceOptions};
use illogical_eval::{EvalError, Evaluable, Evaluator};
use illogical_parser::Parser;
use illogical_types::Value;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};
use std::sync::Arc;

fn context() -> JsonValue {
    json!({
        "refA": 1,
        "refB": {"refB1": 2, "refB2": "refB1", "refB3": true},
        "refC": "refB1",
        "refD": "refB2",
        "refE": [1, [2, 3, 4]],
        "refF": "A",
        "refG": "1",
        "refH": "1.1",
        "refJ": 1.7
    })
}

// ============================================================================
// Lookup
// ============================================================================

#[rstest]
#[case("$refA", Value::from(1))]
#[case("$refB.refB1", Value::from(2))]
#[case("$refB.refB3", Value::from(true))]
#[case("$refE[0]", Value::from(1))]
#[case("$refE[1][2]", Value::from(4))]
#[case("$refB.{refC}", Value::from(2))]
#[case("$refB.{refB.{refD}}", Value::from(2))]
#[case("$refE[{refA}][0]", Value::from(2))]
#[case("$ref{refF}", Value::from(1))]
#[case("$missing", Value::Nil)]
#[case("$refB.{missing}", Value::Nil)]
#[case("$refB", Value::Nil)]
fn test_lookup(#[case] raw: &str, #[case] expected: Value) {
    assert_eq!(eval(json!(raw), context()), Ok(expected));
}

#[test]
fn test_null_context_resolves_nothing() {
    assert_eq!(eval(json!("$refA"), json!(null)), Ok(Value::Nil));
}

// ============================================================================
// Type casting
// ============================================================================

#[rstest]
#[case("$refG.(Number)", Value::from(1))]
#[case("$refH.(Number)", Value::from(1.1))]
#[case("$refH.(Integer)", Value::from(1))]
#[case("$refJ.(Integer)", Value::from(1))]
#[case("$refA.(Float)", Value::from(1.0))]
#[case("$refA.(String)", Value::from("1"))]
#[case("$refG.(Boolean)", Value::from(true))]
#[case("$refA.(Boolean)", Value::from(true))]
#[case("$missing.(Number)", Value::Nil)]
fn test_casting(#[case] raw: &str, #[case] expected: Value) {
    assert_eq!(eval(json!(raw), context()), Ok(expected));
}

#[test]
fn test_cast_failure_is_an_evaluation_error() {
    let err = eval(json!("$refF.(Number)"), context()).unwrap_err();
    assert!(matches!(err, EvalError::Coercion(_)));
}

#[test]
fn test_cast_failure_leaves_reference_unresolved_on_simplify() {
    let result = simplify(json!("$refF.(Number)"), context());
    assert_eq!(result.to_json(), json!("$refF.(Number)"));
}

// ============================================================================
// Simplify
// ============================================================================

#[test]
fn test_simplify_reference() {
    assert_eq!(
        simplify(json!("$refB.{refC}"), context()).as_value(),
        Some(&Value::from(2))
    );
    assert!(!simplify(json!("$missing"), context()).is_value());
}

#[test]
fn test_ignored_paths_stay_unresolved() {
    let options = Options {
        reference: ReferenceOptions {
            ignored: IgnoredPaths::new()
                .with_path("refA")
                .with_pattern(Regex::new("^refB\\.").unwrap()),
            ..ReferenceOptions::default()
        },
        ..Options::default()
    };
    let parser = Parser::new(Arc::new(options));
    let ctx = data(&context());

    for raw in ["$refA", "$refB.refB1", "$refB.{refC}"] {
        let node = parser.parse(&json!(raw)).unwrap();
        assert_eq!(node.simplify(&ctx).to_json(), json!(raw));
        assert!(node.evaluate(&ctx).unwrap() != Value::Nil);
    }

    let node = parser.parse(&json!("$refE[0]")).unwrap();
    assert_eq!(node.simplify(&ctx).as_value(), Some(&Value::from(1)));
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_collection_evaluates_items() {
    assert_eq!(
        eval(json!([1, "$refA", "x", ["==", 1, 1]]), context()),
        Ok(Value::List(vec![
            Value::from(1),
            Value::from(1),
            Value::from("x"),
            Value::from(true),
        ]))
    );
}

#[test]
fn test_collection_simplifies_only_when_complete() {
    let result = simplify(json!([1, "$refA"]), context());
    assert_eq!(result.as_value(), Some(&Value::from(vec![1, 1])));

    let result = simplify(json!([1, "$missing"]), context());
    assert_eq!(result.to_json(), json!([1, "$missing"]));
}

// ============================================================================
// Depth limit
// ============================================================================

#[test]
fn test_depth_limit() {
    let node = parse(&json!(["NOT", ["NOT", ["NOT", true]]]));
    let ctx = data(&json!({}));

    assert_eq!(Evaluator::with_max_depth(4).evaluate(&node, &ctx), Ok(Value::from(false)));
    assert_eq!(
        Evaluator::with_max_depth(3).evaluate(&node, &ctx),
        Err(EvalError::ExpressionDepth { limit: 3 })
    );

    let remainder = Evaluator::with_max_depth(3).simplify(&node, &ctx);
    assert_eq!(remainder.to_string(), "(NOT (NOT (NOT true)))");
}

#[test]
fn test_evaluable_uses_parse_depth_limit() {
    let parser = Parser::new(Arc::new(Options {
        max_depth: 500,
        ..Options::default()
    }));
    let mut raw = json!(true);
    for _ in 0..200 {
        raw = json!(["NOT", raw]);
    }
    let node = parser.parse(&raw).unwrap();
    let ctx = data(&json!({}));

    assert_eq!(node.evaluate(&ctx), Ok(Value::from(true)));
    assert_eq!(node.simplify(&ctx).as_value(), Some(&Value::from(true)));
    assert_eq!(
        Evaluator::new().evaluate(&node, &ctx),
        Err(EvalError::ExpressionDepth { limit: 128 })
    );
}
