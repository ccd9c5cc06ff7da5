//! Reference type casting
//!
//! A reference may carry a `.(TypeName)` suffix asking for its resolved
//! value to be converted. [`DataType`] names the target and
//! [`TypeCoercer`] performs the conversion.

use crate::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// Value cannot be converted to the target type
    #[error("invalid conversion from \"{value}\" ({from}) to {to}")]
    CannotConvert {
        value: String,
        from: String,
        to: DataType,
    },

    /// Type name is not a supported cast target
    #[error("unsupported \"{0}\" type casting")]
    UnsupportedType(String),
}

/// Type coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Cast target of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    /// No casting requested
    #[default]
    Undefined,
    Number,
    Integer,
    Float,
    String,
    Boolean,
}

impl DataType {
    /// Type name as written in a `.(TypeName)` suffix
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Number => "Number",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DataType {
    type Err = CoercionError;

    /// Parse a cast target. `Undefined` is not a valid suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Number" => Ok(Self::Number),
            "Integer" => Ok(Self::Integer),
            "Float" => Ok(Self::Float),
            "String" => Ok(Self::String),
            "Boolean" => Ok(Self::Boolean),
            other => Err(CoercionError::UnsupportedType(other.to_string())),
        }
    }
}

/// Converts resolved values to a reference's [`DataType`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCoercer;

impl TypeCoercer {
    /// Create a new type coercer
    pub fn new() -> Self {
        Self
    }

    /// Convert `value` to `target`.
    ///
    /// `Undefined` and nil values pass through unchanged.
    pub fn cast(&self, value: Value, target: DataType) -> CoercionResult<Value> {
        if value.is_nil() {
            return Ok(value);
        }
        match target {
            DataType::Undefined => Ok(value),
            DataType::Number => self.to_number(&value),
            DataType::Integer => self.to_integer(&value),
            DataType::Float => self.to_float(&value),
            DataType::String => self.to_string(&value),
            DataType::Boolean => self.to_boolean(&value),
        }
    }

    /// Integer and float values are kept. Strings become an integer when
    /// they are plain digits and a float when they are `digits.digits`.
    pub fn to_number(&self, value: &Value) -> CoercionResult<Value> {
        match value {
            Value::Integer(_) => Ok(value.clone()),
            Value::Float(f) if f.is_finite() => Ok(value.clone()),
            Value::Boolean(b) => Ok(Value::Integer(i64::from(*b))),
            Value::String(s) => match classify_number(s) {
                Some(NumberShape::Integer) => s
                    .parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| cannot_convert(value, DataType::Number)),
                Some(NumberShape::Float) => parse_finite(s)
                    .map(Value::Float)
                    .ok_or_else(|| cannot_convert(value, DataType::Number)),
                None => Err(cannot_convert(value, DataType::Number)),
            },
            _ => Err(cannot_convert(value, DataType::Number)),
        }
    }

    pub fn to_integer(&self, value: &Value) -> CoercionResult<Value> {
        match value {
            Value::Integer(_) => Ok(value.clone()),
            Value::Float(f) => truncate(*f)
                .map(Value::Integer)
                .ok_or_else(|| cannot_convert(value, DataType::Integer)),
            Value::Boolean(b) => Ok(Value::Integer(i64::from(*b))),
            Value::String(s) => parse_finite(s)
                .and_then(truncate)
                .map(Value::Integer)
                .ok_or_else(|| cannot_convert(value, DataType::Integer)),
            _ => Err(cannot_convert(value, DataType::Integer)),
        }
    }

    pub fn to_float(&self, value: &Value) -> CoercionResult<Value> {
        match value {
            Value::Integer(i) => Ok(Value::Float(*i as f64)),
            Value::Float(f) if f.is_finite() => Ok(value.clone()),
            Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
            Value::String(s) => parse_finite(s)
                .map(Value::Float)
                .ok_or_else(|| cannot_convert(value, DataType::Float)),
            _ => Err(cannot_convert(value, DataType::Float)),
        }
    }

    /// Accepts booleans, the integers 0 and 1, and the strings
    /// `true`, `false`, `1`, `0` in any case with surrounding spaces.
    pub fn to_boolean(&self, value: &Value) -> CoercionResult<Value> {
        match value {
            Value::Boolean(_) => Ok(value.clone()),
            Value::Integer(0) => Ok(Value::Boolean(false)),
            Value::Integer(1) => Ok(Value::Boolean(true)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Boolean(true)),
                "false" | "0" => Ok(Value::Boolean(false)),
                _ => Err(cannot_convert(value, DataType::Boolean)),
            },
            _ => Err(cannot_convert(value, DataType::Boolean)),
        }
    }

    pub fn to_string(&self, value: &Value) -> CoercionResult<Value> {
        match value {
            Value::List(_) => Err(cannot_convert(value, DataType::String)),
            Value::Float(f) if !f.is_finite() => Err(cannot_convert(value, DataType::String)),
            other => Ok(Value::String(other.to_string())),
        }
    }
}

enum NumberShape {
    Integer,
    Float,
}

/// `0|[1-9]\d*` is an integer, `\d+\.\d+` is a float.
fn classify_number(s: &str) -> Option<NumberShape> {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        None if all_digits(s) && (s == "0" || !s.starts_with('0')) => Some(NumberShape::Integer),
        Some((int, frac)) if all_digits(int) && all_digits(frac) => Some(NumberShape::Float),
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn truncate(f: f64) -> Option<i64> {
    let t = f.trunc();
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}

fn cannot_convert(value: &Value, to: DataType) -> CoercionError {
    CoercionError::CannotConvert {
        value: value.to_string(),
        from: value
            .kind()
            .map(|kind: ValueKind| kind.to_string())
            .unwrap_or_else(|| "Nil".to_string()),
        to,
    }
}
