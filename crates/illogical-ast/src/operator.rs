//! Operators and the operator-token table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Equality
    Eq,
    /// Inequality
    Ne,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Membership (exactly one side is a list)
    In,
    /// Negated membership
    Nin,
    /// Two lists share an element
    Overlap,
    /// String prefix test
    Prefix,
    /// String suffix test
    Suffix,
    /// Operand is nil (unary)
    Nil,
    /// Operand is present (unary)
    Present,
}

impl ComparisonOp {
    pub const ALL: [ComparisonOp; 13] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::In,
        Self::Nin,
        Self::Overlap,
        Self::Prefix,
        Self::Suffix,
        Self::Nil,
        Self::Present,
    ];

    /// Number of operands
    pub const fn arity(&self) -> usize {
        match self {
            Self::Nil | Self::Present => 1,
            _ => 2,
        }
    }

    /// Symbol used in statements
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::In => "<in>",
            Self::Nin => "<not in>",
            Self::Overlap => "<overlaps>",
            Self::Prefix => "<prefixes>",
            Self::Suffix => "<with suffix>",
            Self::Nil => "<is nil>",
            Self::Present => "<is present>",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::Ne => "Ne",
            Self::Gt => "Gt",
            Self::Ge => "Ge",
            Self::Lt => "Lt",
            Self::Le => "Le",
            Self::In => "In",
            Self::Nin => "Nin",
            Self::Overlap => "Overlap",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::Nil => "Nil",
            Self::Present => "Present",
        }
    }
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
    /// Negated or
    Nor,
    /// Exactly one operand is true
    Xor,
    /// Negation (unary)
    Not,
}

impl LogicalOp {
    pub const ALL: [LogicalOp; 5] = [Self::And, Self::Or, Self::Nor, Self::Xor, Self::Not];

    /// Check if this operator takes exactly one operand
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Not)
    }

    /// Minimum number of operands
    pub const fn min_operands(&self) -> usize {
        if self.is_unary() { 1 } else { 2 }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Or => "Or",
            Self::Nor => "Nor",
            Self::Xor => "Xor",
            Self::Not => "Not",
        }
    }
}

/// Any operator that can head an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Comparison(ComparisonOp),
    Logical(LogicalOp),
}

impl Operator {
    /// All operators, logical first
    pub fn all() -> impl Iterator<Item = Operator> {
        LogicalOp::ALL
            .into_iter()
            .map(Self::Logical)
            .chain(ComparisonOp::ALL.into_iter().map(Self::Comparison))
    }

    /// Name used in configuration, e.g. `Eq` or `And`
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Comparison(op) => op.name(),
            Self::Logical(op) => op.name(),
        }
    }

    /// Symbol used in statements
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Comparison(op) => op.symbol(),
            Self::Logical(op) => op.symbol(),
        }
    }

    /// Check if an expression of this operator takes `count` operands
    pub const fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Comparison(op) => count == op.arity(),
            Self::Logical(op) if op.is_unary() => count == 1,
            Self::Logical(op) => count >= op.min_operands(),
        }
    }

    /// Token used in raw expressions unless remapped
    pub const fn default_token(&self) -> &'static str {
        match self {
            Self::Logical(op) => op.symbol(),
            Self::Comparison(ComparisonOp::Nil) => "NIL",
            Self::Comparison(ComparisonOp::Present) => "PRESENT",
            Self::Comparison(ComparisonOp::In) => "IN",
            Self::Comparison(ComparisonOp::Nin) => "NOT IN",
            Self::Comparison(ComparisonOp::Overlap) => "OVERLAP",
            Self::Comparison(ComparisonOp::Prefix) => "PREFIX",
            Self::Comparison(ComparisonOp::Suffix) => "SUFFIX",
            Self::Comparison(op) => op.symbol(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operator {
    type Err = String;

    /// Parse an operator name (not a token)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("unknown operator \"{s}\""))
    }
}

impl From<ComparisonOp> for Operator {
    fn from(op: ComparisonOp) -> Self {
        Self::Comparison(op)
    }
}

impl From<LogicalOp> for Operator {
    fn from(op: LogicalOp) -> Self {
        Self::Logical(op)
    }
}

/// Mapping between operators and the tokens heading raw expressions.
///
/// Every operator always has a token. When two operators share one, the
/// operator remapped last owns it for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorMapping {
    tokens: HashMap<Operator, String>,
    operators: HashMap<String, Operator>,
}

impl OperatorMapping {
    /// Token for an operator
    pub fn token(&self, op: impl Into<Operator>) -> &str {
        let op = op.into();
        self.tokens
            .get(&op)
            .map(String::as_str)
            .unwrap_or_else(|| op.default_token())
    }

    /// Operator for a token
    pub fn lookup(&self, token: &str) -> Option<Operator> {
        self.operators.get(token).copied()
    }

    /// Check if a string would be read as an operator token
    pub fn is_reserved(&self, token: &str) -> bool {
        self.operators.contains_key(token)
    }

    /// Remap one operator
    pub fn with(mut self, op: impl Into<Operator>, token: impl Into<String>) -> Self {
        let op = op.into();
        let token = token.into();
        if let Some(previous) = self.tokens.insert(op, token.clone()) {
            if self.operators.get(&previous) == Some(&op) {
                self.operators.remove(&previous);
            }
        }
        self.operators.insert(token, op);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Operator, &str)> {
        Operator::all().map(|op| (op, self.token(op)))
    }
}

impl Default for OperatorMapping {
    fn default() -> Self {
        let tokens: HashMap<Operator, String> = Operator::all()
            .map(|op| (op, op.default_token().to_string()))
            .collect();
        let operators = tokens.iter().map(|(op, t)| (t.clone(), *op)).collect();
        Self { tokens, operators }
    }
}
