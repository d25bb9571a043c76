//! Engine capability interface.
//!
//! The resolver consumes exactly one interface, [`FeatureEngine`]. Engines that
//! expose a variation key and its variables separately are adapted explicitly
//! through [`LookupEngine`].

use crate::error::EngineResult;
use kameleoon_types::{NativeValue, Variable, Variation};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Flag evaluation engine returning whole variations.
pub trait FeatureEngine: Send + Sync {
    /// Evaluate `flag_key` for the engine's current visitor.
    fn get_variation(&self, flag_key: &str) -> EngineResult<Variation>;
}

impl<E: FeatureEngine + ?Sized> FeatureEngine for Arc<E> {
    fn get_variation(&self, flag_key: &str) -> EngineResult<Variation> {
        (**self).get_variation(flag_key)
    }
}

/// Engine style that looks up the variation key first, then its variables.
pub trait VariationLookup: Send + Sync {
    /// Key of the variation assigned for `flag_key`.
    fn variation_key(&self, flag_key: &str) -> EngineResult<String>;

    /// Variables of a variation, by name.
    fn variation_variables(
        &self,
        flag_key: &str,
        variation_key: &str,
    ) -> EngineResult<BTreeMap<String, NativeValue>>;
}

/// Adapts a [`VariationLookup`] engine to [`FeatureEngine`].
#[derive(Debug, Clone)]
pub struct LookupEngine<L> {
    lookup: L,
}

impl<L: VariationLookup> LookupEngine<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn inner(&self) -> &L {
        &self.lookup
    }
}

impl<L: VariationLookup> FeatureEngine for LookupEngine<L> {
    fn get_variation(&self, flag_key: &str) -> EngineResult<Variation> {
        let variation_key = self.lookup.variation_key(flag_key)?;
        let variables = self.lookup.variation_variables(flag_key, &variation_key)?;

        Ok(variables
            .into_iter()
            .fold(Variation::new(variation_key), |variation, (name, value)| {
                variation.with_variable(Variable::typed(name, value))
            }))
    }
}
