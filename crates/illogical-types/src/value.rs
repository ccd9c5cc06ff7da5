//! Runtime values
//!
//! This module defines the [`Value`] enum produced by evaluation and stored
//! in a flattened context, together with the comparability rules shared by
//! every comparison operator.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// The primary value type for runtime values.
///
/// Literals in an expression are always scalars; lists only appear as the
/// result of evaluating a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value (unresolved reference)
    Nil,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
}

/// Primitive kind of a non-nil value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Boolean"),
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::String => write!(f, "String"),
            Self::List => write!(f, "List"),
        }
    }
}

impl Value {
    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Check if this value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Primitive kind, `None` for nil
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Nil => None,
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Integer(_) => Some(ValueKind::Integer),
            Self::Float(_) => Some(ValueKind::Float),
            Self::String(_) => Some(ValueKind::String),
            Self::List(_) => Some(ValueKind::List),
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as List
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Two values are comparable iff both are nil, or both are non-nil
    /// scalars of the same kind.
    pub fn is_comparable(&self, other: &Value) -> bool {
        match (self.kind(), other.kind()) {
            (None, None) => true,
            (Some(ValueKind::List), _) | (_, Some(ValueKind::List)) => false,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Comparable and equal. Mismatched kinds are never equal.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        self.is_comparable(other) && self == other
    }

    /// Convert a JSON scalar into a value. Objects, arrays and null are
    /// not scalars and yield `None`.
    pub fn from_json_scalar(json: &JsonValue) -> Option<Value> {
        match json {
            JsonValue::Bool(b) => Some(Self::Boolean(*b)),
            JsonValue::Number(n) => Some(match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64()?),
            }),
            JsonValue::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    /// Convert into the JSON data form. Non-finite floats become null.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Nil => JsonValue::Null,
            Self::Boolean(b) => JsonValue::Bool(*b),
            Self::Integer(i) => JsonValue::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
        }
    }
}

/// Plain rendering: strings are written raw, lists as `[a, b]`, nil as
/// `nil`. Used for path interpolation and string casting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) => write!(f, "{}", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
