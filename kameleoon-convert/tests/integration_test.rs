//! Integration tests for kameleoon-convert

use kameleoon_convert::*;
use kameleoon_types::*;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("kameleoon_convert=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_absent_context_returns_empty() {
    assert!(to_backend_records(None).is_empty());
}

#[test]
fn test_empty_context_returns_empty() {
    let context = EvaluationContext::with_targeting_key("visitor");
    assert!(to_backend_records(Some(&context)).is_empty());
}

#[test]
fn test_unrecognized_keys_skipped() {
    init_tracing();

    let context = EvaluationContext::with_targeting_key("visitor")
        .with_attribute("plan", "pro")
        .with_data(DataType::VariableKey, "title");
    assert!(to_backend_records(Some(&context)).is_empty());
}

#[test]
fn test_conversion_goal_only() {
    let context = EvaluationContext::new()
        .with_data(DataType::Conversion, Value::structure([("goalId", Value::from(7))]));

    let records = to_backend_records(Some(&context));
    assert_eq!(records, vec![NativeDataRecord::conversion(7, 0.0)]);
}

#[test]
fn test_conversion_with_revenue() {
    for add_revenue in [true, false] {
        let value = if add_revenue {
            DataType::make_conversion(42, 12.5)
        } else {
            DataType::make_goal_conversion(42)
        };
        let context = EvaluationContext::new().with_data(DataType::Conversion, value);

        let records = to_backend_records(Some(&context));
        assert_eq!(records.len(), 1);
        match &records[0] {
            NativeDataRecord::Conversion {
                goal_id,
                revenue,
                negative,
            } => {
                assert_eq!(*goal_id, 42);
                assert!(!negative);
                let expected = if add_revenue { 12.5 } else { 0.0 };
                assert!((revenue - expected).abs() < 1e-6);
            }
            other => panic!("expected conversion, got {other:?}"),
        }
    }
}

#[test]
fn test_conversion_integer_revenue_is_not_widened() {
    init_tracing();

    let context = EvaluationContext::new().with_data(
        DataType::Conversion,
        Value::structure([("goalId", Value::from(1)), ("revenue", Value::Integer(10))]),
    );
    assert_eq!(
        to_backend_records(Some(&context)),
        vec![NativeDataRecord::conversion(1, 0.0)]
    );
}

#[test]
fn test_custom_data_values_shapes() {
    let cases: Vec<Vec<&str>> = vec![vec![], vec![""], vec!["v1"], vec!["v1", "v1"], vec!["v1", "v2", "v3"]];

    for expected in cases {
        let mut fields = Structure::new();
        fields.insert("index".to_string(), Value::from(11));
        match expected.len() {
            0 => {}
            1 => {
                fields.insert("values".to_string(), Value::from(expected[0]));
            }
            _ => {
                fields.insert("values".to_string(), Value::list(expected.clone()));
            }
        }
        let context = EvaluationContext::new().with_data(DataType::CustomData, fields);

        let records = to_backend_records(Some(&context));
        assert_eq!(records, vec![NativeDataRecord::custom_data(11, expected)]);
    }
}

#[test]
fn test_custom_data_batch_keeps_order() {
    let context = EvaluationContext::new().with_data(
        DataType::CustomData,
        Value::List(vec![
            Value::structure([
                ("index", Value::from(1)),
                ("values", Value::list(["a", "b"])),
            ]),
            Value::structure([("index", Value::from(2))]),
        ]),
    );

    let records = to_backend_records(Some(&context));
    assert_eq!(
        records,
        vec![
            NativeDataRecord::custom_data(1, ["a", "b"]),
            NativeDataRecord::custom_data(2, Vec::<String>::new()),
        ]
    );
}

#[test]
fn test_all_kinds_in_one_context() {
    init_tracing();

    let context = EvaluationContext::with_targeting_key("visitor")
        .with_data(
            DataType::Conversion,
            Value::List(vec![
                DataType::make_goal_conversion(10),
                DataType::make_goal_conversion(20),
            ]),
        )
        .with_data(
            DataType::CustomData,
            Value::List(vec![
                DataType::make_custom_data(1, Vec::<String>::new()),
                DataType::make_custom_data(2, ["x"]),
            ]),
        );

    let records = to_backend_records(Some(&context));
    assert_eq!(records.len(), 4);

    let goals: Vec<i32> = records
        .iter()
        .filter_map(|r| match r {
            NativeDataRecord::Conversion { goal_id, .. } => Some(*goal_id),
            _ => None,
        })
        .collect();
    assert_eq!(goals, vec![10, 20]);

    let ids: Vec<i32> = records
        .iter()
        .filter_map(|r| match r {
            NativeDataRecord::CustomData { id, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_to_generic_value_table() {
    let cases = vec![
        (None, Value::Null),
        (Some(NativeValue::Generic(Value::Integer(1))), Value::Integer(1)),
        (Some(NativeValue::Integer(42)), Value::Integer(42)),
        (Some(NativeValue::Double(2.5)), Value::Double(2.5)),
        (Some(NativeValue::Boolean(true)), Value::Boolean(true)),
        (Some(NativeValue::from("test")), Value::from("test")),
        (
            Some(NativeValue::Json(json!({"key": "value"}))),
            Value::structure([("key", Value::from("value"))]),
        ),
        (
            Some(NativeValue::Json(json!([1, 2, 3]))),
            Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(optional_to_generic_value(input), expected);
    }
}

#[test]
fn test_json_scalars() {
    assert_eq!(to_generic_value(NativeValue::Json(json!(null))), Value::Null);
    assert_eq!(to_generic_value(NativeValue::Json(json!("s"))), Value::from("s"));
    assert_eq!(to_generic_value(NativeValue::Json(json!(true))), Value::Boolean(true));
    assert_eq!(to_generic_value(NativeValue::Json(json!(1.25))), Value::Double(1.25));
}
