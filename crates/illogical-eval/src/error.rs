//! Evaluation errors

use illogical_diagnostics::{IL0100, IL0101, IL0102, IL0103, IllogicalError};
use illogical_types::CoercionError;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A logical operator consumed a non-boolean operand
    #[error("invalid evaluated operand, must be boolean value")]
    NonBooleanOperand { operator: String },

    /// Typed reference could not be cast
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// Path interpolation did not settle
    #[error("maximum of {limit} path interpolations exceeded in \"{path}\"")]
    InterpolationDepth { path: String, limit: usize },

    /// Node tree nested deeper than the evaluator allows
    #[error("maximum expression depth of {limit} exceeded")]
    ExpressionDepth { limit: usize },
}

impl EvalError {
    /// Create a non-boolean operand error
    pub fn non_boolean_operand(operator: impl Into<String>) -> Self {
        Self::NonBooleanOperand {
            operator: operator.into(),
        }
    }
}

impl From<EvalError> for IllogicalError {
    fn from(err: EvalError) -> Self {
        match &err {
            EvalError::NonBooleanOperand { operator } => {
                IllogicalError::evaluation(IL0100, err.to_string()).with_context(operator.as_str())
            }
            EvalError::Coercion(_) => IllogicalError::evaluation(IL0101, err.to_string()),
            EvalError::InterpolationDepth { .. } => {
                IllogicalError::evaluation(IL0102, err.to_string())
            }
            EvalError::ExpressionDepth { .. } => IllogicalError::evaluation(IL0103, err.to_string()),
        }
    }
}
