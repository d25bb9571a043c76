//! Generic Value union
//!
//! A closed tagged type able to carry any attribute or flag result without
//! committing to a concrete native type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyed structure of values.
pub type Structure = BTreeMap<String, Value>;

/// Generic value used for context attributes and object flag results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    List(Vec<Value>),
    Structure(Structure),
}

impl Value {
    /// Build a structure from key/value pairs.
    pub fn structure<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Structure(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list from anything convertible into values.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Self::Structure(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the active variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Structure(_) => "structure",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Double(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
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

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Structure> for Value {
    fn from(value: Structure) -> Self {
        Self::Structure(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_do_not_coerce() {
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::Integer(3).as_double(), None);
        assert_eq!(Value::Double(3.0).as_integer(), None);
        assert_eq!(Value::from("3").as_integer(), None);
        assert_eq!(Value::Boolean(true).as_str(), None);
    }

    #[test]
    fn test_builders() {
        let value = Value::structure([("a", Value::from(1)), ("b", Value::list(["x", "y"]))]);
        let map = value.as_structure().unwrap();
        assert_eq!(map["a"], Value::Integer(1));
        assert_eq!(map["b"].as_list().unwrap().len(), 2);
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_deserialize_json_kinds() {
        let value: Value =
            serde_json::from_str(r#"{"n": null, "i": 7, "d": 2.5, "s": "x", "l": [true]}"#).unwrap();
        let map = value.as_structure().unwrap();
        assert!(map["n"].is_null());
        assert_eq!(map["i"], Value::Integer(7));
        assert_eq!(map["d"], Value::Double(2.5));
        assert_eq!(map["s"].as_str(), Some("x"));
        assert_eq!(map["l"], Value::List(vec![Value::Boolean(true)]));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::List(vec![]).kind(), "list");
        assert_eq!(Value::Structure(Structure::new()).kind(), "structure");
    }
}
