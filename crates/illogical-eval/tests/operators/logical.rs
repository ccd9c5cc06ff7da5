//! Logical Operator Tests
//!
//! Tests for: And, Or, Nor, Xor, Not, evaluation and simplification

use super::{eval, simplify};
use illogical_eval::EvalError;
use illogical_types::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

// ============================================================================
// Evaluate
// ============================================================================

#[rstest]
#[case(json!(["AND", true, true]), true)]
#[case(json!(["AND", true, false]), false)]
#[case(json!(["AND", true, true, false]), false)]
#[case(json!(["OR", false, false]), false)]
#[case(json!(["OR", false, true]), true)]
#[case(json!(["NOR", false, false]), true)]
#[case(json!(["NOR", false, true]), false)]
#[case(json!(["XOR", true, false]), true)]
#[case(json!(["XOR", false, false]), false)]
#[case(json!(["XOR", true, true]), false)]
#[case(json!(["XOR", true, true, true]), false)]
#[case(json!(["XOR", false, false, true]), true)]
#[case(json!(["NOT", true]), false)]
#[case(json!(["NOT", false]), true)]
#[case(json!(["NOT", ["NOT", true]]), true)]
fn test_evaluate(#[case] raw: JsonValue, #[case] expected: bool) {
    assert_eq!(eval(raw, json!({})), Ok(Value::Boolean(expected)));
}

#[rstest]
#[case(json!(["AND", true, 1]), "AND")]
#[case(json!(["OR", false, "x"]), "OR")]
#[case(json!(["NOR", "$a", false]), "NOR")]
#[case(json!(["XOR", 1, true]), "XOR")]
#[case(json!(["NOT", 1]), "NOT")]
fn test_non_boolean_operand(#[case] raw: JsonValue, #[case] operator: &str) {
    assert_eq!(
        eval(raw, json!({"a": 1})),
        Err(EvalError::non_boolean_operand(operator))
    );
}

#[rstest]
#[case(json!(["AND", false, 1]), false)]
#[case(json!(["OR", true, 1]), true)]
#[case(json!(["NOR", true, 1]), false)]
#[case(json!(["XOR", true, true, 1]), false)]
fn test_short_circuit_skips_remaining_operands(#[case] raw: JsonValue, #[case] expected: bool) {
    assert_eq!(eval(raw, json!({})), Ok(Value::Boolean(expected)));
}

#[test]
fn test_first_error_wins() {
    let err = eval(json!(["AND", "$a.(Number)", 1]), json!({"a": "x"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid conversion from \"x\" (String) to Number"
    );
}

// ============================================================================
// Simplify
// ============================================================================

fn simplified(raw: JsonValue, ctx: JsonValue) -> JsonValue {
    simplify(raw, ctx).to_json()
}

#[rstest]
#[case(json!(["AND", true, ["==", "$x", 1]]), json!(["==", "$x", 1]))]
#[case(json!(["AND", false, ["==", "$x", 1]]), json!(false))]
#[case(json!(["AND", ["==", "$a", 1], ["==", "$b", 2]]), json!(true))]
#[case(json!(["AND", ["==", "$a", 1], ["==", "$x", 1], ["==", "$y", 1]]), json!(["AND", ["==", "$x", 1], ["==", "$y", 1]]))]
#[case(json!(["AND", ["==", "$a", 2], ["==", "$x", 1]]), json!(false))]
fn test_simplify_and(#[case] raw: JsonValue, #[case] expected: JsonValue) {
    assert_eq!(simplified(raw, json!({"a": 1, "b": 2})), expected);
}

#[rstest]
#[case(json!(["OR", true, ["==", "$x", 1]]), json!(true))]
#[case(json!(["OR", false, ["==", "$x", 1]]), json!(["==", "$x", 1]))]
#[case(json!(["OR", ["==", "$a", 2], ["==", "$b", 1]]), json!(false))]
#[case(json!(["OR", false, ["==", "$x", 1], ["==", "$y", 1]]), json!(["OR", ["==", "$x", 1], ["==", "$y", 1]]))]
fn test_simplify_or(#[case] raw: JsonValue, #[case] expected: JsonValue) {
    assert_eq!(simplified(raw, json!({"a": 1, "b": 2})), expected);
}

#[rstest]
#[case(json!(["NOR", true, ["==", "$x", 1]]), json!(false))]
#[case(json!(["NOR", false, false]), json!(true))]
#[case(json!(["NOR", false, ["==", "$x", 1]]), json!(["NOT", ["==", "$x", 1]]))]
#[case(json!(["NOR", false, ["==", "$x", 1], ["==", "$y", 1]]), json!(["NOR", ["==", "$x", 1], ["==", "$y", 1]]))]
fn test_simplify_nor(#[case] raw: JsonValue, #[case] expected: JsonValue) {
    assert_eq!(simplified(raw, json!({})), expected);
}

#[rstest]
#[case(json!(["XOR", true, true, ["==", "$x", 1]]), json!(false))]
#[case(json!(["XOR", true, false]), json!(true))]
#[case(json!(["XOR", false, false]), json!(false))]
#[case(json!(["XOR", true, ["==", "$x", 1]]), json!(["NOT", ["==", "$x", 1]]))]
#[case(json!(["XOR", false, ["==", "$x", 1]]), json!(["==", "$x", 1]))]
#[case(json!(["XOR", true, ["==", "$x", 1], ["==", "$y", 1]]), json!(["NOR", ["==", "$x", 1], ["==", "$y", 1]]))]
#[case(json!(["XOR", false, ["==", "$x", 1], ["==", "$y", 1]]), json!(["XOR", ["==", "$x", 1], ["==", "$y", 1]]))]
fn test_simplify_xor(#[case] raw: JsonValue, #[case] expected: JsonValue) {
    assert_eq!(simplified(raw, json!({})), expected);
}

#[rstest]
#[case(json!(["NOT", true]), json!(false))]
#[case(json!(["NOT", ["==", "$a", 1]]), json!(false))]
#[case(json!(["NOT", ["==", "$x", 1]]), json!(["NOT", ["==", "$x", 1]]))]
#[case(json!(["NOT", ["AND", true, ["==", "$x", 1]]]), json!(["NOT", ["==", "$x", 1]]))]
fn test_simplify_not(#[case] raw: JsonValue, #[case] expected: JsonValue) {
    assert_eq!(simplified(raw, json!({"a": 1})), expected);
}

#[test]
fn test_simplify_keeps_non_boolean_operand() {
    let result = simplify(json!(["AND", "$a", ["==", "$x", 1]]), json!({"a": 1}));
    assert_eq!(result.to_json(), json!(["AND", "$a", ["==", "$x", 1]]));
}

#[test]
fn test_simplify_nested_rewrites() {
    let result = simplify(
        json!(["OR", ["AND", "$flag", ["==", "$x", 1]], ["NOR", ["==", "$a", 1], ["==", "$y", 2]]]),
        json!({"a": 1, "flag": true}),
    );
    assert_eq!(result.to_string(), "({x} == 1)");
}
