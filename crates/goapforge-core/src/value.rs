//! Typed values held by world states, literals and bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// The closed set of value kinds a variable can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Boolean,
    String,
    Int,
    Float,
}

impl ValueType {
    /// All supported types, in declaration order.
    pub const ALL: [ValueType; 4] = [
        ValueType::Boolean,
        ValueType::String,
        ValueType::Int,
        ValueType::Float,
    ];

    /// Wire name of the type (`BOOLEAN`, `STRING`, `INT`, `FLOAT`).
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Boolean => "BOOLEAN",
            ValueType::String => "STRING",
            ValueType::Int => "INT",
            ValueType::Float => "FLOAT",
        }
    }

    /// The value an unbound variable of this type resolves to.
    pub fn default_value(self) -> Value {
        match self {
            ValueType::Boolean => Value::Boolean(false),
            ValueType::String => Value::String(String::new()),
            ValueType::Int => Value::Int(0),
            ValueType::Float => Value::Float(0.0),
        }
    }

    /// Returns true for INT and FLOAT.
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueType::Int | ValueType::Float)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOLEAN" => Ok(ValueType::Boolean),
            "STRING" => Ok(ValueType::String),
            "INT" => Ok(ValueType::Int),
            "FLOAT" => Ok(ValueType::Float),
            other => Err(ConstructionError::UnsupportedType(other.to_string())),
        }
    }
}

/// A typed value.
///
/// Serializes externally tagged by type name, e.g. `{"INT": 5}`, which is the
/// literal shape used by arguments and bindings on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    Boolean(bool),
    String(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Returns the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Reads INT or FLOAT as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Reads an untyped JSON scalar as a value of `value_type`.
    ///
    /// Integral JSON numbers are accepted for FLOAT; floats with no fractional
    /// part are accepted for INT.
    pub fn from_json(value_type: ValueType, json: &serde_json::Value) -> Option<Value> {
        match (value_type, json) {
            (ValueType::Boolean, serde_json::Value::Bool(b)) => Some(Value::Boolean(*b)),
            (ValueType::String, serde_json::Value::String(s)) => Some(Value::String(s.clone())),
            (ValueType::Int, serde_json::Value::Number(n)) => n.as_i64().map(Value::Int).or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map(|f| Value::Int(f as i64))
            }),
            (ValueType::Float, serde_json::Value::Number(n)) => n.as_f64().map(Value::Float),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
