//! illogical expression tree
//!
//! This crate defines the nodes a raw expression is parsed into, the
//! operator-token table, and the options every node captures at parse
//! time. Nodes render back to their raw data form with `serialize` and to
//! a readable statement with `Display`.

mod literal;
mod node;
mod operator;
mod options;

pub use literal::*;
pub use node::*;
pub use operator::*;
pub use options::*;
