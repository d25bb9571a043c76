//! Kameleoon Data Converter
//!
//! Pure, stateless translation between OpenFeature-style values and the
//! Kameleoon engine's native data.
//!
//! - [`to_backend_records`] turns the `conversion` and `customData`
//!   attributes of an evaluation context into engine data records
//! - [`to_generic_value`] turns an engine-native value (including JSON
//!   variables) into a generic [`Value`](kameleoon_types::Value)
//!
//! # Example
//!
//! ```
//! use kameleoon_convert::{to_backend_records, to_generic_value};
//! use kameleoon_types::*;
//!
//! let context = EvaluationContext::with_targeting_key("visitor-1")
//!     .with_data(DataType::Conversion, DataType::make_goal_conversion(7));
//!
//! let records = to_backend_records(Some(&context));
//! assert_eq!(records, vec![NativeDataRecord::conversion(7, 0.0)]);
//!
//! let value = to_generic_value(NativeValue::Json(serde_json::json!([1, 2, 3])));
//! assert_eq!(value, Value::list([1, 2, 3]));
//! ```

pub mod generic;
pub mod records;

pub use generic::{json_to_value, optional_to_generic_value, to_generic_value};
pub use records::{RecordKind, to_backend_records};
