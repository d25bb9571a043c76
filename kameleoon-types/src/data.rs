//! Kameleoon data records produced from context attributes.

use serde::Serialize;

/// Backend-native data handed to the engine's `add_data` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NativeDataRecord {
    /// Goal conversion
    #[serde(rename_all = "camelCase")]
    Conversion {
        goal_id: i32,
        revenue: f32,
        /// Whether the conversion is negative
        negative: bool,
    },

    /// Custom data values stored at an index
    #[serde(rename_all = "camelCase")]
    CustomData { id: i32, values: Vec<String> },
}

impl NativeDataRecord {
    pub fn conversion(goal_id: i32, revenue: f32) -> Self {
        Self::Conversion {
            goal_id,
            revenue,
            negative: false,
        }
    }

    pub fn custom_data<S: Into<String>>(id: i32, values: impl IntoIterator<Item = S>) -> Self {
        Self::CustomData {
            id,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }

    pub fn is_custom_data(&self) -> bool {
        matches!(self, Self::CustomData { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let conversion = serde_json::to_value(NativeDataRecord::conversion(7, 0.0)).unwrap();
        assert_eq!(
            conversion,
            json!({"type": "conversion", "goalId": 7, "revenue": 0.0, "negative": false})
        );

        let custom = serde_json::to_value(NativeDataRecord::custom_data(2, ["a"])).unwrap();
        assert_eq!(custom, json!({"type": "customData", "id": 2, "values": ["a"]}));
    }

    #[test]
    fn test_kind_predicates() {
        let conversion = NativeDataRecord::conversion(1, 2.5);
        assert!(conversion.is_conversion());
        assert!(!conversion.is_custom_data());

        let custom = NativeDataRecord::custom_data(3, Vec::<String>::new());
        assert!(custom.is_custom_data());
        assert!(!custom.is_conversion());
    }
}
