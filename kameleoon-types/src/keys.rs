//! Recognized attribute-key vocabulary.
//!
//! These strings are a stable external contract: callers place them in an
//! [`EvaluationContext`](crate::EvaluationContext) to select variables and to
//! send Kameleoon data.

use crate::value::{Structure, Value};

/// Context attribute keys with meaning to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Selects which variable of a variation to read
    VariableKey,
    /// One conversion, or a list of conversions
    Conversion,
    /// One custom data entry, or a list of them
    CustomData,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::VariableKey => "variableKey",
            DataType::Conversion => "conversion",
            DataType::CustomData => "customData",
        }
    }

    /// Conversion attribute value with goal and revenue.
    pub fn make_conversion(goal_id: i32, revenue: f32) -> Value {
        Value::structure([
            (ConversionField::GoalId.as_str(), Value::from(goal_id)),
            (ConversionField::Revenue.as_str(), Value::from(revenue)),
        ])
    }

    /// Conversion attribute value with only a goal.
    pub fn make_goal_conversion(goal_id: i32) -> Value {
        Value::structure([(ConversionField::GoalId.as_str(), Value::from(goal_id))])
    }

    /// Custom data attribute value.
    pub fn make_custom_data<S: Into<String>>(
        id: i32,
        values: impl IntoIterator<Item = S>,
    ) -> Value {
        let values = values.into_iter().map(|v| Value::String(v.into()));
        let mut map = Structure::new();
        map.insert(CustomDataField::Index.as_str().to_string(), Value::from(id));
        map.insert(
            CustomDataField::Values.as_str().to_string(),
            Value::List(values.collect()),
        );
        Value::Structure(map)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a conversion structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionField {
    GoalId,
    Revenue,
}

impl ConversionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionField::GoalId => "goalId",
            ConversionField::Revenue => "revenue",
        }
    }
}

/// Fields of a custom data structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomDataField {
    Index,
    Values,
}

impl CustomDataField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomDataField::Index => "index",
            CustomDataField::Values => "values",
        }
    }
}
