//! Kameleoon Flag Resolver
//!
//! Resolves a flag key, a typed default and an optional evaluation context to
//! a typed [`EvaluationResult`] by reading the variation the Kameleoon engine
//! assigns.
//!
//! # Resolution
//!
//! 1. Optionally reject a missing context ([`ContextPolicy::Required`])
//! 2. Ask the engine for the variation
//! 3. Pick the variable named by the `variableKey` attribute, or the first one
//! 4. Report `FLAG_NOT_FOUND` when no value is found
//! 5. Require the value kind to match the default's type exactly, except for
//!    generic [`Value`](kameleoon_types::Value) defaults, which accept anything
//!
//! Every failure comes back inside the result with the caller's default.
//!
//! # Example
//!
//! ```
//! use kameleoon_resolver::*;
//! use kameleoon_types::*;
//! use std::sync::Arc;
//!
//! struct OneFlag;
//!
//! impl FeatureEngine for OneFlag {
//!     fn get_variation(&self, flag_key: &str) -> EngineResult<Variation> {
//!         match flag_key {
//!             "new-checkout" => Ok(Variation::new("on").with_variable(Variable::typed("enabled", true))),
//!             _ => Err(EngineError::FeatureNotFound(flag_key.to_string())),
//!         }
//!     }
//! }
//!
//! let resolver = Resolver::new(Arc::new(OneFlag));
//!
//! let result = resolver.resolve("new-checkout", false, None);
//! assert!(result.value);
//! assert_eq!(result.variant.as_deref(), Some("on"));
//!
//! let missing = resolver.resolve("old-checkout", false, None);
//! assert_eq!(missing.error_code(), Some(ErrorCode::FlagNotFound));
//! ```

pub mod engine;
pub mod error;
pub mod evaluation;
pub mod resolver;

pub use engine::{FeatureEngine, LookupEngine, VariationLookup};
pub use error::{EngineError, EngineResult};
pub use evaluation::{ErrorCode, EvaluationError, EvaluationResult, Reason};
pub use resolver::{ContextPolicy, FlagValue, Resolver};
