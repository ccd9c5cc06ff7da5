//! illogical evaluation engine
//!
//! Evaluates parsed expression trees against a flattened context and
//! partially evaluates them when only part of the context is known.
//!
//! # Example
//!
//! ```ignore
//! use illogical_eval::{Evaluator, Simplified};
//! use illogical_parser::Parser;
//! use illogical_types::flatten_context;
//! use serde_json::json;
//!
//! let node = Parser::default().parse(&json!(["AND", ["==", "$a", 1], ["==", "$b", 2]]))?;
//! let ctx = flatten_context(&json!({"a": 1})).unwrap_or_default();
//!
//! // ({b} == 2)
//! let remainder = Evaluator::new().simplify(&node, &ctx);
//! ```
//!
//! # Architecture
//!
//! - `Evaluator`: dispatches each node kind to its operator implementation
//! - `EvaluationContext`: flattened variables and depth of the current call
//! - `operators`: comparison, logical, reference and collection semantics
//! - `resolve`: reference path interpolation and lookup

pub mod context;
pub mod engine;
pub mod error;
pub mod operators;
pub mod resolve;

pub use context::EvaluationContext;
pub use engine::{Evaluable, Evaluator, Simplified};
pub use error::{EvalError, EvalResult};
pub use operators::compare;
pub use resolve::{MAX_INTERPOLATION_DEPTH, Resolution, resolve};
