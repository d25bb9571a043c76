//! Backend client contract used by the provider.

use async_trait::async_trait;
use kameleoon_resolver::{EngineResult, FeatureEngine};
use kameleoon_types::NativeDataRecord;

/// Kameleoon client: flag evaluation plus data collection and readiness.
#[async_trait]
pub trait KameleoonClient: FeatureEngine {
    /// Queue data records for the current visitor.
    fn add_data(&self, records: Vec<NativeDataRecord>);

    /// Whether configuration has been fetched.
    fn is_ready(&self) -> bool;

    /// Wait until the client finishes its first configuration fetch.
    ///
    /// Returns `Ok(false)` when the client gave up without failing.
    async fn wait_ready(&self) -> EngineResult<bool>;

    /// Release client resources. Called once on provider shutdown.
    fn close(&self) {}
}
