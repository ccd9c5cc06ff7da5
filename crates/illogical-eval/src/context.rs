//! Evaluation context
//!
//! Carries the flattened variables and the current node depth through a
//! single evaluate or simplify call.

use crate::error::{EvalError, EvalResult};
use illogical_types::FlattenedContext;

/// State of one evaluation
#[derive(Debug)]
pub struct EvaluationContext<'a> {
    data: &'a FlattenedContext,
    depth: usize,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(data: &'a FlattenedContext) -> Self {
        Self { data, depth: 0 }
    }

    /// Flattened variables
    pub fn data(&self) -> &'a FlattenedContext {
        self.data
    }

    /// Current node depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Step into a child node
    pub(crate) fn enter(&mut self, limit: usize) -> EvalResult<()> {
        if self.depth >= limit {
            return Err(EvalError::ExpressionDepth { limit });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
