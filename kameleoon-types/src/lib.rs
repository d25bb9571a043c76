//! Kameleoon OpenFeature Types
//!
//! Data model shared by the converter, the resolver and the provider.
//!
//! - [`Value`] - closed union for arbitrary typed attributes and object flags
//! - [`EvaluationContext`] - targeting key plus attributes
//! - [`NativeValue`] - engine-native runtime values
//! - [`Variation`] / [`Variable`] - engine evaluation outcome
//! - [`NativeDataRecord`] - conversion and custom data records
//! - [`DataType`] - recognized attribute keys
//!
//! # Quick Start
//!
//! ```
//! use kameleoon_types::*;
//!
//! let context = EvaluationContext::with_targeting_key("visitor-1")
//!     .with_data(DataType::VariableKey, "title")
//!     .with_data(DataType::Conversion, DataType::make_conversion(12, 9.5));
//!
//! assert_eq!(context.variable_key(), Some("title"));
//! ```

pub mod context;
pub mod data;
pub mod keys;
pub mod native;
pub mod value;
pub mod variation;

pub use context::EvaluationContext;
pub use data::NativeDataRecord;
pub use keys::{ConversionField, CustomDataField, DataType};
pub use native::NativeValue;
pub use value::{Structure, Value};
pub use variation::{Variable, Variation};
