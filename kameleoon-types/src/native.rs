//! Engine-native runtime values.

use crate::value::Value;
use serde::Serialize;

/// A value as the Kameleoon engine hands it out.
///
/// Each variant is a distinct runtime kind. Flag type reconciliation compares
/// kinds exactly, so an `Integer` never satisfies a `Double` request and a
/// `Float` is not a `Double`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NativeValue {
    /// Already a generic value
    Generic(Value),
    Integer(i64),
    Double(f64),
    /// Single precision number
    Float(f32),
    Boolean(bool),
    String(String),
    /// JSON variable: object, array or scalar tree
    Json(serde_json::Value),
    /// A kind the adapter does not model, carried by type name
    Unsupported(String),
}

impl NativeValue {
    /// Variable type tag the engine would report for this value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            NativeValue::Integer(_) | NativeValue::Double(_) | NativeValue::Float(_) => "NUMBER",
            NativeValue::Boolean(_) => "BOOLEAN",
            NativeValue::String(_) => "STRING",
            NativeValue::Json(_) | NativeValue::Generic(_) => "JSON",
            NativeValue::Unsupported(_) => "UNKNOWN",
        }
    }

    /// Runtime kind name, used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            NativeValue::Generic(_) => "value",
            NativeValue::Integer(_) => "integer",
            NativeValue::Double(_) => "double",
            NativeValue::Float(_) => "float",
            NativeValue::Boolean(_) => "boolean",
            NativeValue::String(_) => "string",
            NativeValue::Json(_) => "json",
            NativeValue::Unsupported(name) => name,
        }
    }
}

impl From<Value> for NativeValue {
    fn from(value: Value) -> Self {
        NativeValue::Generic(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Integer(value.into())
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Integer(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Double(value)
    }
}

impl From<f32> for NativeValue {
    fn from(value: f32) -> Self {
        NativeValue::Float(value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::String(value)
    }
}

impl From<serde_json::Value> for NativeValue {
    fn from(value: serde_json::Value) -> Self {
        NativeValue::Json(value)
    }
}
