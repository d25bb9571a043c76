//! Evaluation context (targeting key plus typed attributes)

use crate::keys::DataType;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject of a flag evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationContext {
    /// Targeting key (the Kameleoon visitor code), required when deserializing
    pub targeting_key: String,

    /// Attributes, iterated in key order
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targeting_key(targeting_key: impl Into<String>) -> Self {
        Self {
            targeting_key: targeting_key.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, replacing any previous value under the same key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set one of the recognized Kameleoon attributes.
    pub fn with_data(self, data_type: DataType, value: impl Into<Value>) -> Self {
        self.with_attribute(data_type.as_str(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn targeting_key(&self) -> &str {
        &self.targeting_key
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The variable selector attribute, when present and a string.
    pub fn variable_key(&self) -> Option<&str> {
        self.get(DataType::VariableKey.as_str())
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_key_requires_string() {
        let context = EvaluationContext::with_targeting_key("visitor")
            .with_data(DataType::VariableKey, "title");
        assert_eq!(context.variable_key(), Some("title"));

        let context = EvaluationContext::new().with_data(DataType::VariableKey, 5);
        assert_eq!(context.variable_key(), None);
    }

    #[test]
    fn test_attribute_replaced() {
        let context = EvaluationContext::new()
            .with_attribute("plan", "free")
            .with_attribute("plan", "pro");
        assert_eq!(context.get("plan").and_then(Value::as_str), Some("pro"));
        assert_eq!(context.attributes.len(), 1);
    }

    #[test]
    fn test_deserialize_from_json() {
        let context: EvaluationContext = serde_json::from_str(
            r#"{"targetingKey": "visitor-1", "attributes": {"conversion": {"goalId": 3}}}"#,
        )
        .unwrap();
        assert_eq!(context.targeting_key(), "visitor-1");
        let conversion = context.get("conversion").and_then(Value::as_structure).unwrap();
        assert_eq!(conversion["goalId"], Value::Integer(3));
    }

    #[test]
    fn test_deserialize_requires_targeting_key() {
        let err = serde_json::from_str::<EvaluationContext>(r#"{"attributes": {}}"#).unwrap_err();
        assert!(err.to_string().contains("targetingKey"));

        let context: EvaluationContext = serde_json::from_str(r#"{"targetingKey": "v"}"#).unwrap();
        assert!(context.is_empty());
    }
}
