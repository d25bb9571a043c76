// Kameleoon OpenFeature - an OpenFeature provider for the Kameleoon engine
//
// This library resolves typed feature flags from Kameleoon variations and
// forwards conversion and custom data from evaluation contexts to the engine.

// Re-export member crates
pub use kameleoon_convert as convert;
pub use kameleoon_provider as provider;
pub use kameleoon_resolver as resolver;
pub use kameleoon_types as types;

#[cfg(feature = "testing")]
pub use kameleoon_testing as testing;

// JSON variables are carried as serde_json trees
pub use serde_json;

pub use kameleoon_convert::{to_backend_records, to_generic_value};
pub use kameleoon_provider::{
    KameleoonClient, KameleoonProvider, ProviderConfig, ProviderError, ProviderEvent,
    ProviderMetadata, ProviderStatus,
};
pub use kameleoon_resolver::{
    ContextPolicy, EngineError, EngineResult, ErrorCode, EvaluationResult, FeatureEngine,
    LookupEngine, Reason, Resolver, VariationLookup,
};
pub use kameleoon_types::{
    DataType, EvaluationContext, NativeDataRecord, NativeValue, Value, Variable, Variation,
};

/// Prelude module for convenient imports
///
/// ```
/// use kameleoon_openfeature::prelude::*;
///
/// let context = EvaluationContext::with_targeting_key("visitor-1")
///     .with_data(DataType::VariableKey, "color");
/// assert_eq!(context.variable_key(), Some("color"));
/// ```
pub mod prelude {
    pub use kameleoon_convert::{to_backend_records, to_generic_value};
    pub use kameleoon_provider::{
        KameleoonClient, KameleoonProvider, ProviderConfig, ProviderError, ProviderEvent,
        ProviderStatus,
    };
    pub use kameleoon_resolver::{
        ContextPolicy, EngineError, EngineResult, ErrorCode, EvaluationResult, FeatureEngine,
        Reason, Resolver,
    };
    pub use kameleoon_types::{
        DataType, EvaluationContext, NativeDataRecord, NativeValue, Value, Variable, Variation,
    };
}
