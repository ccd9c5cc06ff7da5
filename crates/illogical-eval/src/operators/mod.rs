//! Operator implementations
//!
//! Each module adds evaluate and simplify methods to [`Evaluator`](crate::Evaluator)
//! for one kind of node:
//! - References and collections
//! - Comparison operators (Eq, In, Prefix, etc.)
//! - Logical operators and the simplification algebra

pub mod comparison;
pub mod logical;
pub mod operand;

pub use comparison::compare;
