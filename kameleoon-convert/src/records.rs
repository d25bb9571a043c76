//! Context attributes to Kameleoon data records.
//!
//! Conversion is best effort: a missing or malformed sub-field falls back to
//! its default instead of failing the whole batch.

use kameleoon_types::{
    ConversionField, CustomDataField, DataType, EvaluationContext, NativeDataRecord, Structure,
    Value,
};
use tracing::debug;

/// Attribute kinds that produce records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Conversion,
    CustomData,
}

impl RecordKind {
    /// Kind for a context attribute key, if it is one of the record keys.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == DataType::Conversion.as_str() {
            Some(RecordKind::Conversion)
        } else if key == DataType::CustomData.as_str() {
            Some(RecordKind::CustomData)
        } else {
            None
        }
    }

    /// Build one record from a structure item.
    pub fn build(self, fields: &Structure) -> NativeDataRecord {
        match self {
            RecordKind::Conversion => make_conversion(fields),
            RecordKind::CustomData => make_custom_data(fields),
        }
    }
}

/// Convert the recognized attributes of a context into records.
///
/// Records come out in attribute iteration order, then list order within an
/// attribute. An absent or empty context yields no records.
pub fn to_backend_records(context: Option<&EvaluationContext>) -> Vec<NativeDataRecord> {
    let Some(context) = context.filter(|c| !c.is_empty()) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for (key, value) in &context.attributes {
        let Some(kind) = RecordKind::from_key(key) else {
            continue;
        };

        let items = match value {
            Value::List(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };

        for item in items {
            match item.as_structure() {
                Some(fields) => records.push(kind.build(fields)),
                None => debug!(
                    attribute = %key,
                    kind = item.kind(),
                    "Skipping non-structure data item"
                ),
            }
        }
    }
    records
}

fn make_conversion(fields: &Structure) -> NativeDataRecord {
    let goal_id = read_id(fields, ConversionField::GoalId.as_str());

    // Only a double counts; integers are not widened.
    let revenue = fields
        .get(ConversionField::Revenue.as_str())
        .and_then(Value::as_double)
        .map_or(0.0, |revenue| revenue as f32);

    NativeDataRecord::conversion(goal_id, revenue)
}

fn make_custom_data(fields: &Structure) -> NativeDataRecord {
    let id = read_id(fields, CustomDataField::Index.as_str());

    let values = match fields.get(CustomDataField::Values.as_str()) {
        Some(Value::List(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(single) => single.as_str().map(str::to_string).into_iter().collect(),
        None => Vec::new(),
    };

    NativeDataRecord::CustomData { id, values }
}

/// Integer field narrowed to the engine's id width, 0 when missing or out of range.
fn read_id(fields: &Structure, name: &str) -> i32 {
    fields
        .get(name)
        .and_then(Value::as_integer)
        .and_then(|id| i32::try_from(id).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(entries: Vec<(&str, Value)>) -> Structure {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_record_kind_from_key() {
        assert_eq!(RecordKind::from_key("conversion"), Some(RecordKind::Conversion));
        assert_eq!(RecordKind::from_key("customData"), Some(RecordKind::CustomData));
        assert_eq!(RecordKind::from_key("variableKey"), None);
        assert_eq!(RecordKind::from_key("custom_data"), None);
    }

    #[test]
    fn test_conversion_defaults() {
        let record = RecordKind::Conversion.build(&Structure::new());
        assert_eq!(record, NativeDataRecord::conversion(0, 0.0));
    }

    #[test]
    fn test_conversion_wrong_field_types_default() {
        let fields = structure(vec![
            ("goalId", Value::from("7")),
            ("revenue", Value::from(true)),
        ]);
        assert_eq!(
            RecordKind::Conversion.build(&fields),
            NativeDataRecord::conversion(0, 0.0)
        );
    }

    #[test]
    fn test_conversion_integer_revenue_defaults() {
        let fields = structure(vec![("goalId", Value::from(3)), ("revenue", Value::from(10))]);
        assert_eq!(
            RecordKind::Conversion.build(&fields),
            NativeDataRecord::conversion(3, 0.0)
        );
    }

    #[test]
    fn test_out_of_range_id_defaults() {
        let fields = structure(vec![("index", Value::Integer(i64::from(i32::MAX) + 1))]);
        assert_eq!(
            RecordKind::CustomData.build(&fields),
            NativeDataRecord::custom_data(0, Vec::<String>::new())
        );
    }

    #[test]
    fn test_custom_data_single_string() {
        let fields = structure(vec![("index", Value::from(5)), ("values", Value::from(""))]);
        assert_eq!(
            RecordKind::CustomData.build(&fields),
            NativeDataRecord::custom_data(5, [""])
        );
    }

    #[test]
    fn test_custom_data_drops_non_strings() {
        let fields = structure(vec![
            ("index", Value::from(1)),
            (
                "values",
                Value::List(vec![Value::from("a"), Value::from(2), Value::Null, Value::from("b")]),
            ),
        ]);
        assert_eq!(
            RecordKind::CustomData.build(&fields),
            NativeDataRecord::custom_data(1, ["a", "b"])
        );
    }

    #[test]
    fn test_custom_data_single_non_string_is_empty() {
        let fields = structure(vec![("index", Value::from(1)), ("values", Value::from(4))]);
        assert_eq!(
            RecordKind::CustomData.build(&fields),
            NativeDataRecord::custom_data(1, Vec::<String>::new())
        );
    }

    #[test]
    fn test_non_structure_items_skipped() {
        let context = EvaluationContext::new().with_attribute(
            "conversion",
            Value::List(vec![
                Value::from(5),
                DataType::make_goal_conversion(2),
            ]),
        );
        assert_eq!(
            to_backend_records(Some(&context)),
            vec![NativeDataRecord::conversion(2, 0.0)]
        );
    }
}
