//! Variation and variable model supplied by the engine.

use crate::native::NativeValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single typed value attached to a variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Variable name
    pub key: String,

    /// Engine type tag (`BOOLEAN`, `NUMBER`, `STRING`, `JSON`, ...)
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Value, absent when the engine holds null
    pub value: Option<NativeValue>,
}

impl Variable {
    pub fn new(
        key: impl Into<String>,
        type_tag: impl Into<String>,
        value: Option<NativeValue>,
    ) -> Self {
        Self {
            key: key.into(),
            type_tag: type_tag.into(),
            value,
        }
    }

    /// Variable whose type tag follows the value kind.
    pub fn typed(key: impl Into<String>, value: impl Into<NativeValue>) -> Self {
        let value = value.into();
        Self::new(key, value.type_tag(), Some(value))
    }
}

/// Named outcome of evaluating a flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Variant key (e.g. `on`, `off`, `variation_1`)
    pub key: String,

    /// Variation id, when the engine assigned one
    pub id: Option<i64>,

    /// Experiment the variation belongs to
    pub experiment_id: Option<i64>,

    /// Variables by name; may be empty
    pub variables: BTreeMap<String, Variable>,
}

impl Variation {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ids(mut self, id: i64, experiment_id: i64) -> Self {
        self.id = Some(id);
        self.experiment_id = Some(experiment_id);
        self
    }

    /// Add a variable under its own key.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.insert(variable.key.clone(), variable);
        self
    }

    /// Add a variable under an explicit name.
    pub fn with_named_variable(mut self, name: impl Into<String>, variable: Variable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// First variable name in iteration order.
    pub fn first_variable_key(&self) -> Option<&str> {
        self.variables.keys().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_variable_key() {
        let variation = Variation::new("on")
            .with_variable(Variable::typed("zeta", 1))
            .with_variable(Variable::typed("alpha", "a"));
        assert_eq!(variation.first_variable_key(), Some("alpha"));
        assert_eq!(Variation::new("off").first_variable_key(), None);
    }

    #[test]
    fn test_named_variable_keeps_inner_key() {
        let variation = Variation::new("on").with_named_variable("k", Variable::new("", "", None));
        let variable = variation.variable("k").unwrap();
        assert!(variable.key.is_empty());
        assert!(variable.value.is_none());
    }
}
