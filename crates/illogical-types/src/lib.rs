//! illogical runtime values
//!
//! This crate provides the value model shared by the node tree and the
//! evaluator:
//! - [`Value`]: runtime values produced by evaluation
//! - [`DataType`] and [`TypeCoercer`]: reference type casting
//! - [`FlattenedContext`]: the `path -> value` view used for every lookup

mod coercion;
mod context;
mod value;

pub use coercion::*;
pub use context::*;
pub use value::*;
