//! Flag resolution over Kameleoon variations.

use crate::engine::FeatureEngine;
use crate::evaluation::{ErrorCode, EvaluationResult};
use kameleoon_convert::to_generic_value;
use kameleoon_types::{EvaluationContext, NativeValue, Value, Variation};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

const TYPE_MISMATCH_MESSAGE: &str = "The type of value received is different from the requested value.";

/// Whether an evaluation context must accompany every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextPolicy {
    /// Resolve without a context; the variable falls back to the first one
    #[default]
    Optional,
    /// Reject resolutions without a context as `TARGETING_KEY_MISSING`
    Required,
}

/// Types a flag can be resolved to.
///
/// Scalar impls accept exactly one native kind; [`Value`] accepts any kind.
pub trait FlagValue: Sized {
    /// Take the native value if it has this flag type.
    fn from_native(native: NativeValue) -> Option<Self>;
}

impl FlagValue for bool {
    fn from_native(native: NativeValue) -> Option<Self> {
        match native {
            NativeValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl FlagValue for i64 {
    fn from_native(native: NativeValue) -> Option<Self> {
        match native {
            NativeValue::Integer(i) => Some(i),
            _ => None,
        }
    }
}

impl FlagValue for f64 {
    fn from_native(native: NativeValue) -> Option<Self> {
        match native {
            NativeValue::Double(d) => Some(d),
            _ => None,
        }
    }
}

impl FlagValue for String {
    fn from_native(native: NativeValue) -> Option<Self> {
        match native {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FlagValue for Value {
    fn from_native(native: NativeValue) -> Option<Self> {
        Some(to_generic_value(native))
    }
}

/// Resolves typed flag values from the engine's variations.
///
/// Holds no state besides the engine handle, so it can be shared across
/// threads and called concurrently.
pub struct Resolver<E: ?Sized> {
    engine: Arc<E>,
    context_policy: ContextPolicy,
}

impl<E: ?Sized> Clone for Resolver<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            context_policy: self.context_policy,
        }
    }
}

impl<E: FeatureEngine + ?Sized> Resolver<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            engine,
            context_policy: ContextPolicy::default(),
        }
    }

    pub fn with_context_policy(mut self, context_policy: ContextPolicy) -> Self {
        self.context_policy = context_policy;
        self
    }

    pub fn context_policy(&self) -> ContextPolicy {
        self.context_policy
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Resolve `flag_key` to a value of the default's type.
    ///
    /// Never fails: every error is reported inside the result together with
    /// `default_value`.
    pub fn resolve<T: FlagValue>(
        &self,
        flag_key: &str,
        default_value: T,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<T> {
        if context.is_none() && self.context_policy == ContextPolicy::Required {
            warn!(flag_key, "Evaluation context missing");
            return EvaluationResult::error(
                default_value,
                None,
                ErrorCode::TargetingKeyMissing,
                format!("Evaluation context is required to resolve flag '{flag_key}'"),
            );
        }

        let variation = match self.engine.get_variation(flag_key) {
            Ok(variation) => variation,
            Err(err) => {
                let code = if err.is_feature_error() {
                    ErrorCode::FlagNotFound
                } else {
                    ErrorCode::General
                };
                debug!(flag_key, error_code = %code, error = %err, "Engine failed to evaluate flag");
                return EvaluationResult::error(default_value, None, code, err.to_string());
            }
        };

        let Variation {
            key: variant,
            mut variables,
            ..
        } = variation;

        // With no selector, engines are expected to carry a single variable.
        let variable_key = context
            .and_then(EvaluationContext::variable_key)
            .map(str::to_string)
            .or_else(|| variables.keys().next().cloned());

        let native = variable_key
            .as_deref()
            .and_then(|key| variables.remove(key))
            .and_then(|variable| variable.value);

        let Some(native) = native else {
            let message = not_found_message(&variant, variable_key.as_deref());
            debug!(flag_key, variant = %variant, "{message}");
            return EvaluationResult::error(
                default_value,
                Some(variant),
                ErrorCode::FlagNotFound,
                message,
            );
        };

        let received = native.type_tag();
        match T::from_native(native) {
            Some(value) => EvaluationResult::success(value, variant),
            None => {
                debug!(
                    flag_key,
                    variant = %variant,
                    received,
                    expected = std::any::type_name::<T>(),
                    "Flag type mismatch"
                );
                EvaluationResult::error(
                    default_value,
                    Some(variant),
                    ErrorCode::TypeMismatch,
                    TYPE_MISMATCH_MESSAGE,
                )
            }
        }
    }

    pub fn resolve_boolean(
        &self,
        flag_key: &str,
        default_value: bool,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<bool> {
        self.resolve(flag_key, default_value, context)
    }

    pub fn resolve_integer(
        &self,
        flag_key: &str,
        default_value: i64,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<i64> {
        self.resolve(flag_key, default_value, context)
    }

    pub fn resolve_double(
        &self,
        flag_key: &str,
        default_value: f64,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<f64> {
        self.resolve(flag_key, default_value, context)
    }

    pub fn resolve_string(
        &self,
        flag_key: &str,
        default_value: String,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<String> {
        self.resolve(flag_key, default_value, context)
    }

    pub fn resolve_value(
        &self,
        flag_key: &str,
        default_value: Value,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<Value> {
        self.resolve(flag_key, default_value, context)
    }
}

fn not_found_message(variant: &str, variable_key: Option<&str>) -> String {
    match variable_key.filter(|key| !key.is_empty()) {
        Some(key) => {
            format!("The value for provided variable key '{key}' isn't found in variation '{variant}'")
        }
        None => format!("The variation '{variant}' has no variables"),
    }
}
