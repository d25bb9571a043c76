// Mock utilities for testing

use async_trait::async_trait;
use kameleoon_provider::KameleoonClient;
use kameleoon_resolver::{EngineError, EngineResult, FeatureEngine, VariationLookup};
use kameleoon_types::{NativeDataRecord, NativeValue, Variation};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type CallLog = Arc<Mutex<Vec<String>>>;

/// Scripted Kameleoon client
///
/// Flags without a scripted outcome fail with `FeatureNotFound`.
#[derive(Default)]
pub struct MockClient {
    outcomes: Mutex<HashMap<String, EngineResult<Variation>>>,
    calls: CallLog,
    data: Mutex<Vec<NativeDataRecord>>,
    ready: AtomicBool,
    ready_result: Mutex<Option<EngineResult<bool>>>,
    ready_delay: Option<Duration>,
    closed: AtomicBool,
}

impl MockClient {
    /// Create a new mock client (not ready)
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `variation` for `flag_key`
    pub fn with_variation(self, flag_key: &str, variation: Variation) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(flag_key.to_string(), Ok(variation));
        self
    }

    /// Fail `flag_key` with `error`
    pub fn with_error(self, flag_key: &str, error: EngineError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(flag_key.to_string(), Err(error));
        self
    }

    /// Set readiness reported by `is_ready` and `wait_ready`
    pub fn ready(self, ready: bool) -> Self {
        self.ready.store(ready, Ordering::SeqCst);
        self
    }

    /// Override the outcome of `wait_ready`
    pub fn with_ready_result(self, result: EngineResult<bool>) -> Self {
        *self.ready_result.lock().unwrap() = Some(result);
        self
    }

    /// Delay `wait_ready` by `delay`
    pub fn with_ready_delay(mut self, delay: Duration) -> Self {
        self.ready_delay = Some(delay);
        self
    }

    /// Record a method call
    pub fn record_call(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    /// Get the number of calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a call was recorded
    pub fn was_called(&self, call: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == call)
    }

    /// Clear all recorded calls
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Records received through `add_data`, in arrival order
    pub fn recorded_data(&self) -> Vec<NativeDataRecord> {
        self.data.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl FeatureEngine for MockClient {
    fn get_variation(&self, flag_key: &str) -> EngineResult<Variation> {
        self.record_call(format!("get_variation({flag_key})"));
        self.outcomes
            .lock()
            .unwrap()
            .get(flag_key)
            .cloned()
            .unwrap_or_else(|| Err(EngineError::FeatureNotFound(flag_key.to_string())))
    }
}

#[async_trait]
impl KameleoonClient for MockClient {
    fn add_data(&self, records: Vec<NativeDataRecord>) {
        self.record_call("add_data");
        self.data.lock().unwrap().extend(records);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn wait_ready(&self) -> EngineResult<bool> {
        self.record_call("wait_ready");
        if let Some(delay) = self.ready_delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.ready_result.lock().unwrap().clone();
        scripted.unwrap_or_else(|| Ok(self.is_ready()))
    }

    fn close(&self) {
        self.record_call("close");
        self.closed.store(true, Ordering::SeqCst);
        self.ready.store(false, Ordering::SeqCst);
    }
}

/// Scripted engine of the key-then-variables style
#[derive(Default)]
pub struct MockLookup {
    flags: HashMap<String, (String, BTreeMap<String, NativeValue>)>,
    calls: CallLog,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `variation_key` with `variables` to `flag_key`
    pub fn with_flag<I, K>(mut self, flag_key: &str, variation_key: &str, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, NativeValue)>,
        K: Into<String>,
    {
        let variables = variables.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.flags
            .insert(flag_key.to_string(), (variation_key.to_string(), variables));
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl VariationLookup for MockLookup {
    fn variation_key(&self, flag_key: &str) -> EngineResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("variation_key({flag_key})"));
        self.flags
            .get(flag_key)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| EngineError::FeatureNotFound(flag_key.to_string()))
    }

    fn variation_variables(
        &self,
        flag_key: &str,
        variation_key: &str,
    ) -> EngineResult<BTreeMap<String, NativeValue>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("variation_variables({flag_key}, {variation_key})"));
        match self.flags.get(flag_key) {
            Some((key, variables)) if key == variation_key => Ok(variables.clone()),
            _ => Err(EngineError::FeatureVariationNotFound {
                flag_key: flag_key.to_string(),
                variation_key: variation_key.to_string(),
            }),
        }
    }
}
