//! Literal operands

use illogical_types::Value;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// A scalar literal in an expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// Any JSON number that does not fit `i64`
    Float(f64),
    String(String),
}

impl Literal {
    /// Build a literal from a JSON scalar. Null, arrays and objects are
    /// not literals.
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match Value::from_json_scalar(json)? {
            Value::Boolean(b) => Some(Self::Boolean(b)),
            Value::Integer(i) => Some(Self::Integer(i)),
            Value::Float(f) => Some(Self::Float(f)),
            Value::String(s) => Some(Self::String(s)),
            Value::Nil | Value::List(_) => None,
        }
    }

    /// Runtime value of this literal
    pub fn to_value(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Boolean(*b),
            Self::Integer(i) => Value::Integer(*i),
            Self::Float(f) => Value::Float(*f),
            Self::String(s) => Value::String(s.clone()),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        self.to_value().to_json()
    }
}

/// Strings are quoted, everything else is written plain.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
