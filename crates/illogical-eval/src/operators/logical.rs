//! Logical operators
//!
//! Implements: And, Or, Nor, Xor, Not. Every consumed operand must
//! evaluate to a boolean. Simplification drops operands known to be
//! neutral, collapses on a dominant one, and rewrites the remainder into
//! the smallest equivalent expression.

use crate::context::EvaluationContext;
use crate::engine::{Evaluator, Simplified};
use crate::error::{EvalError, EvalResult};
use illogical_ast::{Logical, LogicalOp, Node};
use illogical_types::Value;

/// An operand after simplification
enum Operand {
    Known(bool),
    Unknown(Node),
}

impl Evaluator {
    /// Evaluate a logical expression.
    ///
    /// And, Or and Nor stop at the first operand deciding the result. Xor
    /// stops at the second true operand.
    pub(crate) fn eval_logical(
        &self,
        expr: &Logical,
        ctx: &mut EvaluationContext,
    ) -> EvalResult<Value> {
        let op = expr.op();
        let result = match op {
            LogicalOp::And => {
                let mut result = true;
                for operand in expr.operands() {
                    if !self.eval_boolean(operand, op, ctx)? {
                        result = false;
                        break;
                    }
                }
                result
            }
            LogicalOp::Or => {
                let mut result = false;
                for operand in expr.operands() {
                    if self.eval_boolean(operand, op, ctx)? {
                        result = true;
                        break;
                    }
                }
                result
            }
            // Not is a Nor of a single operand
            LogicalOp::Nor | LogicalOp::Not => {
                let mut result = true;
                for operand in expr.operands() {
                    if self.eval_boolean(operand, op, ctx)? {
                        result = false;
                        break;
                    }
                }
                result
            }
            LogicalOp::Xor => {
                let mut truths = 0;
                for operand in expr.operands() {
                    if self.eval_boolean(operand, op, ctx)? {
                        truths += 1;
                        if truths > 1 {
                            break;
                        }
                    }
                }
                truths == 1
            }
        };
        Ok(Value::Boolean(result))
    }

    fn eval_boolean(
        &self,
        operand: &Node,
        op: LogicalOp,
        ctx: &mut EvaluationContext,
    ) -> EvalResult<bool> {
        self.eval_node(operand, ctx)?
            .as_boolean()
            .ok_or_else(|| EvalError::non_boolean_operand(op.symbol()))
    }

    pub(crate) fn simplify_logical(
        &self,
        expr: &Logical,
        ctx: &mut EvaluationContext,
    ) -> Simplified {
        match expr.op() {
            LogicalOp::And => self.simplify_and_or(expr, false, ctx),
            LogicalOp::Or => self.simplify_and_or(expr, true, ctx),
            LogicalOp::Nor => self.simplify_nor(expr, ctx),
            LogicalOp::Xor => self.simplify_xor(expr, ctx),
            LogicalOp::Not => self.simplify_not(expr, ctx),
        }
    }

    /// And collapses on `false`, Or on `true`. The other literal is dropped.
    fn simplify_and_or(
        &self,
        expr: &Logical,
        dominant: bool,
        ctx: &mut EvaluationContext,
    ) -> Simplified {
        let mut remainder = Vec::new();
        for operand in expr.operands() {
            match self.simplify_operand(operand, ctx) {
                Operand::Known(b) if b == dominant => return Simplified::Value(Value::Boolean(b)),
                Operand::Known(_) => {}
                Operand::Unknown(node) => remainder.push(node),
            }
        }

        match remainder.len() {
            0 => Simplified::Value(Value::Boolean(!dominant)),
            1 => Simplified::Node(remainder.remove(0)),
            _ => rebuild(expr, expr.op(), remainder),
        }
    }

    fn simplify_nor(&self, expr: &Logical, ctx: &mut EvaluationContext) -> Simplified {
        let mut remainder = Vec::new();
        for operand in expr.operands() {
            match self.simplify_operand(operand, ctx) {
                Operand::Known(true) => return Simplified::Value(Value::Boolean(false)),
                Operand::Known(false) => {}
                Operand::Unknown(node) => remainder.push(node),
            }
        }

        match remainder.len() {
            0 => Simplified::Value(Value::Boolean(true)),
            1 => negate(expr, remainder.remove(0)),
            _ => rebuild(expr, LogicalOp::Nor, remainder),
        }
    }

    fn simplify_xor(&self, expr: &Logical, ctx: &mut EvaluationContext) -> Simplified {
        let mut truthy = 0;
        let mut remainder = Vec::new();
        for operand in expr.operands() {
            match self.simplify_operand(operand, ctx) {
                Operand::Known(true) => {
                    truthy += 1;
                    if truthy > 1 {
                        return Simplified::Value(Value::Boolean(false));
                    }
                }
                Operand::Known(false) => {}
                Operand::Unknown(node) => remainder.push(node),
            }
        }

        match (remainder.len(), truthy == 1) {
            (0, one_true) => Simplified::Value(Value::Boolean(one_true)),
            (1, true) => negate(expr, remainder.remove(0)),
            (1, false) => Simplified::Node(remainder.remove(0)),
            (_, true) => rebuild(expr, LogicalOp::Nor, remainder),
            (_, false) => rebuild(expr, LogicalOp::Xor, remainder),
        }
    }

    fn simplify_not(&self, expr: &Logical, ctx: &mut EvaluationContext) -> Simplified {
        let Some(operand) = expr.operands().first() else {
            return Simplified::Node(Node::Logical(expr.clone()));
        };
        match self.simplify_operand(operand, ctx) {
            Operand::Known(b) => Simplified::Value(Value::Boolean(!b)),
            Operand::Unknown(node) => negate(expr, node),
        }
    }

    /// A non-boolean value stays in the remainder as its original node, so
    /// evaluating the remainder reports it.
    fn simplify_operand(&self, operand: &Node, ctx: &mut EvaluationContext) -> Operand {
        match self.simplify_node(operand, ctx) {
            Simplified::Value(Value::Boolean(b)) => Operand::Known(b),
            Simplified::Value(_) => Operand::Unknown(operand.clone()),
            Simplified::Node(node) => Operand::Unknown(node),
        }
    }
}

fn negate(expr: &Logical, operand: Node) -> Simplified {
    Simplified::Node(Logical::not(operand, expr.options().clone()).into())
}

fn rebuild(expr: &Logical, op: LogicalOp, operands: Vec<Node>) -> Simplified {
    match Logical::new(op, operands, expr.options().clone()) {
        Ok(logical) => Simplified::Node(logical.into()),
        Err(_) => Simplified::Node(Node::Logical(expr.clone())),
    }
}
