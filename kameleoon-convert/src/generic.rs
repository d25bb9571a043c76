//! Engine-native values to the generic [`Value`] union.

use kameleoon_types::{NativeValue, Value};
use serde_json::Number;
use tracing::debug;

/// Convert an engine-native value into a generic value.
///
/// Containers are converted recursively. Kinds the adapter does not model
/// become [`Value::Null`].
pub fn to_generic_value(native: NativeValue) -> Value {
    match native {
        NativeValue::Generic(value) => value,
        NativeValue::Integer(i) => Value::Integer(i),
        NativeValue::Double(d) => Value::Double(d),
        NativeValue::Float(f) => Value::Double(f.into()),
        NativeValue::Boolean(b) => Value::Boolean(b),
        NativeValue::String(s) => Value::String(s),
        NativeValue::Json(json) => json_to_value(json),
        NativeValue::Unsupported(kind) => {
            debug!(kind = %kind, "Unsupported native value converted to null");
            Value::Null
        }
    }
}

/// Like [`to_generic_value`], mapping an absent value to [`Value::Null`].
pub fn optional_to_generic_value(native: Option<NativeValue>) -> Value {
    native.map_or(Value::Null, to_generic_value)
}

/// Convert a JSON tree into a generic value.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Object(map) => Value::Structure(
            map.into_iter()
                .map(|(key, value)| (key, json_to_value(value)))
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Number(number) => number_to_value(&number),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Null => Value::Null,
    }
}

/// Integral numbers that fit `i64` become integers, everything else doubles.
fn number_to_value(number: &Number) -> Value {
    if let Some(i) = number.as_i64() {
        Value::Integer(i)
    } else if let Some(d) = number.as_f64() {
        Value::Double(d)
    } else {
        unreachable!("JSON number {number} has no numeric representation")
    }
}
