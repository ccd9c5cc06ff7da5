//! Comparison operators
//!
//! Implements: Eq, Ne, Gt, Ge, Lt, Le, In, Nin, Overlap, Prefix, Suffix,
//! Nil, Present. Handlers are pure over fully evaluated operands; values of
//! different kinds never compare equal and never order.

use crate::context::EvaluationContext;
use crate::engine::{Evaluator, Simplified};
use crate::error::EvalResult;
use illogical_ast::{Comparison, ComparisonOp, Node};
use illogical_types::Value;
use std::cmp::Ordering;

impl Evaluator {
    /// Evaluate operands in order, then apply the handler
    pub(crate) fn eval_comparison(
        &self,
        expr: &Comparison,
        ctx: &mut EvaluationContext,
    ) -> EvalResult<Value> {
        let values = expr
            .operands()
            .iter()
            .map(|operand| self.eval_node(operand, ctx))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::Boolean(compare(expr.op(), &values)))
    }

    /// All or nothing: any unresolved operand leaves the whole comparison
    /// unchanged.
    pub(crate) fn simplify_comparison(
        &self,
        expr: &Comparison,
        ctx: &mut EvaluationContext,
    ) -> Simplified {
        let mut values = Vec::with_capacity(expr.operands().len());
        for operand in expr.operands() {
            match self.simplify_node(operand, ctx) {
                Simplified::Value(value) => values.push(value),
                Simplified::Node(_) => return Simplified::Node(Node::Comparison(expr.clone())),
            }
        }
        Simplified::Value(Value::Boolean(compare(expr.op(), &values)))
    }
}

/// Apply a comparison to evaluated operands.
///
/// Returns false when the operand count does not match the operator.
pub fn compare(op: ComparisonOp, operands: &[Value]) -> bool {
    match (op, operands) {
        (ComparisonOp::Nil, [value]) => value.is_nil(),
        (ComparisonOp::Present, [value]) => !value.is_nil(),
        (ComparisonOp::Eq, [a, b]) => a.loosely_equals(b),
        (ComparisonOp::Ne, [a, b]) => !a.loosely_equals(b),
        (ComparisonOp::Gt, [a, b]) => order(a, b) == Some(Ordering::Greater),
        (ComparisonOp::Ge, [a, b]) => matches!(order(a, b), Some(Ordering::Greater | Ordering::Equal)),
        (ComparisonOp::Lt, [a, b]) => order(a, b) == Some(Ordering::Less),
        (ComparisonOp::Le, [a, b]) => matches!(order(a, b), Some(Ordering::Less | Ordering::Equal)),
        (ComparisonOp::In, [a, b]) => membership(a, b).unwrap_or(false),
        (ComparisonOp::Nin, [a, b]) => membership(a, b).map(|found| !found).unwrap_or(true),
        (ComparisonOp::Overlap, [Value::List(left), Value::List(right)]) => left
            .iter()
            .any(|l| right.iter().any(|r| l.loosely_equals(r))),
        (ComparisonOp::Prefix, [Value::String(a), Value::String(b)]) => b.starts_with(a.as_str()),
        (ComparisonOp::Suffix, [Value::String(a), Value::String(b)]) => a.ends_with(b.as_str()),
        _ => false,
    }
}

/// Order two numbers of the same kind
fn order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        _ => None,
    }
}

/// Whether the scalar side is in the list side. `None` unless exactly one
/// operand is a list.
fn membership(a: &Value, b: &Value) -> Option<bool> {
    let (haystack, needle) = match (a, b) {
        (Value::List(items), needle) if !needle.is_list() => (items, needle),
        (needle, Value::List(items)) if !needle.is_list() => (items, needle),
        _ => return None,
    };
    Some(haystack.iter().any(|item| item.loosely_equals(needle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_count_mismatch_is_false() {
        assert!(!compare(ComparisonOp::Eq, &[Value::from(1)]));
        assert!(!compare(ComparisonOp::Nil, &[]));
    }

    #[test]
    fn test_membership() {
        let list = Value::from(vec![1, 2]);
        assert_eq!(membership(&Value::from(1), &list), Some(true));
        assert_eq!(membership(&list, &Value::from(3)), Some(false));
        assert_eq!(membership(&list, &list), None);
        assert_eq!(membership(&Value::from(1), &Value::from(1)), None);
    }
}
