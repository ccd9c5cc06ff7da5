//! Comparison Operator Tests
//!
//! Tests for: Eq, Ne, Gt, Ge, Lt, Le, In, Nin, Overlap, Prefix, Suffix, Nil, Present

use super::{eval, simplify};
use illogical_types::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

fn check(raw: JsonValue, expected: bool) {
    assert_eq!(eval(raw, json!({})), Ok(Value::Boolean(expected)));
}

// ============================================================================
// Equality
// ============================================================================

#[rstest]
#[case(json!(1), json!(1), true)]
#[case(json!(1.1), json!(1.1), true)]
#[case(json!("1"), json!("1"), true)]
#[case(json!(true), json!(true), true)]
#[case(json!(1), json!(2), false)]
#[case(json!(1), json!(1.0), false)]
#[case(json!(1), json!("1"), false)]
#[case(json!(1), json!(true), false)]
#[case(json!("$missing"), json!("$other"), true)]
#[case(json!("$missing"), json!(1), false)]
#[case(json!([1]), json!([1]), false)]
fn test_eq_and_ne(#[case] left: JsonValue, #[case] right: JsonValue, #[case] equal: bool) {
    check(json!(["==", left.clone(), right.clone()]), equal);
    check(json!(["!=", left, right]), !equal);
}

// ============================================================================
// Ordering
// ============================================================================

#[rstest]
#[case(">", json!(2), json!(1), true)]
#[case(">", json!(1), json!(1), false)]
#[case(">", json!(1.5), json!(1.25), true)]
#[case(">", json!(2), json!(1.5), false)]
#[case(">=", json!(1), json!(1), true)]
#[case(">=", json!(0), json!(1), false)]
#[case("<", json!(1), json!(2), true)]
#[case("<", json!(1.5), json!(2), false)]
#[case("<=", json!(2), json!(2), true)]
#[case("<=", json!("a"), json!("b"), false)]
#[case("<=", json!(true), json!(true), false)]
fn test_ordering(
    #[case] op: &str,
    #[case] left: JsonValue,
    #[case] right: JsonValue,
    #[case] expected: bool,
) {
    check(json!([op, left, right]), expected);
}

// ============================================================================
// Membership
// ============================================================================

#[rstest]
#[case(json!(1), json!([1, 2]), true)]
#[case(json!([1, 2]), json!(2), true)]
#[case(json!(3), json!([1, 2]), false)]
#[case(json!("1"), json!([1, 2]), false)]
#[case(json!([1]), json!([1]), false)]
#[case(json!(1), json!(1), false)]
fn test_in_and_not_in(#[case] left: JsonValue, #[case] right: JsonValue, #[case] found: bool) {
    check(json!(["IN", left.clone(), right.clone()]), found);
    check(json!(["NOT IN", left, right]), !found);
}

#[rstest]
#[case(json!([1, 2]), json!([2, 3]), true)]
#[case(json!(["a"]), json!(["b", "a"]), true)]
#[case(json!([1, 2]), json!([3, 4]), false)]
#[case(json!([1]), json!(["1"]), false)]
#[case(json!(1), json!([1]), false)]
#[case(json!(1), json!(1), false)]
fn test_overlap(#[case] left: JsonValue, #[case] right: JsonValue, #[case] expected: bool) {
    check(json!(["OVERLAP", left, right]), expected);
}

// ============================================================================
// Strings
// ============================================================================

#[rstest]
#[case("PREFIX", json!("bo"), json!("bogus"), true)]
#[case("PREFIX", json!("us"), json!("bogus"), false)]
#[case("PREFIX", json!(1), json!("1"), false)]
#[case("SUFFIX", json!("bogus"), json!("us"), true)]
#[case("SUFFIX", json!("something"), json!("else"), false)]
#[case("SUFFIX", json!("1"), json!(true), false)]
fn test_prefix_and_suffix(
    #[case] op: &str,
    #[case] left: JsonValue,
    #[case] right: JsonValue,
    #[case] expected: bool,
) {
    check(json!([op, left, right]), expected);
}

// ============================================================================
// Presence
// ============================================================================

#[test]
fn test_nil_and_present() {
    let ctx = json!({"a": 1});
    assert_eq!(eval(json!(["NIL", "$a"]), ctx.clone()), Ok(Value::Boolean(false)));
    assert_eq!(eval(json!(["NIL", "$b"]), ctx.clone()), Ok(Value::Boolean(true)));
    assert_eq!(eval(json!(["PRESENT", "$a"]), ctx.clone()), Ok(Value::Boolean(true)));
    assert_eq!(eval(json!(["PRESENT", "$b"]), ctx), Ok(Value::Boolean(false)));
}

// ============================================================================
// Simplify
// ============================================================================

#[test]
fn test_simplify_resolved() {
    let result = simplify(json!(["==", "$a", 1]), json!({"a": 1}));
    assert_eq!(result.as_value(), Some(&Value::Boolean(true)));
}

#[test]
fn test_simplify_is_all_or_nothing() {
    let result = simplify(json!(["==", "$a", "$b"]), json!({"a": 1}));
    assert_eq!(result.to_json(), json!(["==", "$a", "$b"]));
    assert_eq!(result.to_string(), "({a} == {b})");
}

#[test]
fn test_simplify_nil_of_missing_reference_stays_unresolved() {
    let result = simplify(json!(["NIL", "$a"]), json!({}));
    assert_eq!(result.to_json(), json!(["NIL", "$a"]));
}
