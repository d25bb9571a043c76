//! Kameleoon provider lifecycle.

use crate::client::KameleoonClient;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::status::{ProviderEvent, ProviderMetadata, ProviderStatus};
use kameleoon_convert::to_backend_records;
use kameleoon_resolver::{ErrorCode, EvaluationResult, FlagValue, Resolver};
use kameleoon_types::{EvaluationContext, Value};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// OpenFeature-style provider backed by a Kameleoon client.
///
/// Owns the client from construction until [`shutdown`](Self::shutdown);
/// afterwards every evaluation returns its default with
/// `PROVIDER_NOT_READY`.
pub struct KameleoonProvider<C: ?Sized> {
    config: ProviderConfig,
    resolver: RwLock<Option<Resolver<C>>>,
    events: broadcast::Sender<ProviderEvent>,
}

impl<C: KameleoonClient + ?Sized> KameleoonProvider<C> {
    /// Create a provider around an existing client.
    pub fn new(config: ProviderConfig, client: Arc<C>) -> Result<Self> {
        config.validate()?;

        let resolver = Resolver::new(client).with_context_policy(config.context_policy);
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        debug!(site_code = %config.site_code, "Kameleoon provider created");

        Ok(Self {
            config,
            resolver: RwLock::new(Some(resolver)),
            events,
        })
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::default()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn site_code(&self) -> &str {
        &self.config.site_code
    }

    /// The client, until the provider is shut down.
    pub fn client(&self) -> Option<Arc<C>> {
        self.resolver
            .read()
            .as_ref()
            .map(|resolver| Arc::clone(resolver.engine()))
    }

    /// Subscribe to lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }

    pub fn status(&self) -> ProviderStatus {
        match self.client() {
            None => ProviderStatus::Stale,
            Some(client) if client.is_ready() => ProviderStatus::Ready,
            Some(_) => ProviderStatus::NotReady,
        }
    }

    /// Wait for the client, then send the context's data records.
    ///
    /// Publishes [`ProviderEvent::Ready`] once the client is ready, or
    /// [`ProviderEvent::Error`] if waiting fails or times out. Fails with
    /// [`ProviderError::NotReady`] if the provider is shut down before the
    /// client becomes ready.
    pub async fn initialize(&self, context: Option<&EvaluationContext>) -> Result<()> {
        let client = self.client().ok_or(ProviderError::NotReady)?;
        let timeout = self.config.ready_timeout;

        match tokio::time::timeout(timeout, client.wait_ready()).await {
            Ok(Ok(true)) => {
                // Shut down while waiting.
                if self.resolver.read().is_none() {
                    return Err(ProviderError::NotReady);
                }
                send_records(client.as_ref(), context);
                info!(site_code = %self.config.site_code, "Kameleoon provider ready");
                self.publish(ProviderEvent::Ready);
                Ok(())
            }
            Ok(Ok(false)) => {
                debug!(site_code = %self.config.site_code, "Kameleoon client not ready");
                Ok(())
            }
            Ok(Err(err)) => {
                warn!(error = %err, "Kameleoon client failed to initialize");
                self.publish(ProviderEvent::Error(err.to_string()));
                Err(err.into())
            }
            Err(_) => {
                let err = ProviderError::ReadyTimeout(timeout);
                warn!(error = %err, "Kameleoon client initialization timed out");
                self.publish(ProviderEvent::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Forward the new context's data records to the client.
    pub fn on_context_set(
        &self,
        _old_context: Option<&EvaluationContext>,
        new_context: &EvaluationContext,
    ) {
        if let Some(client) = self.client() {
            send_records(client.as_ref(), Some(new_context));
        }
    }

    /// Release the client and publish [`ProviderEvent::Stale`].
    pub fn shutdown(&self) {
        let Some(resolver) = self.resolver.write().take() else {
            return;
        };
        resolver.engine().close();
        info!(site_code = %self.config.site_code, "Kameleoon provider shut down");
        self.publish(ProviderEvent::Stale);
    }

    /// Resolve a flag of any supported type.
    pub fn evaluate<T: FlagValue>(
        &self,
        flag_key: &str,
        default_value: T,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<T> {
        let resolver = self.resolver.read().clone();
        match resolver {
            Some(resolver) => resolver.resolve(flag_key, default_value, context),
            None => EvaluationResult::error(
                default_value,
                None,
                ErrorCode::ProviderNotReady,
                ProviderError::NotReady.to_string(),
            ),
        }
    }

    pub fn boolean_evaluation(
        &self,
        flag_key: &str,
        default_value: bool,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<bool> {
        self.evaluate(flag_key, default_value, context)
    }

    pub fn integer_evaluation(
        &self,
        flag_key: &str,
        default_value: i64,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<i64> {
        self.evaluate(flag_key, default_value, context)
    }

    pub fn double_evaluation(
        &self,
        flag_key: &str,
        default_value: f64,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<f64> {
        self.evaluate(flag_key, default_value, context)
    }

    pub fn string_evaluation(
        &self,
        flag_key: &str,
        default_value: impl Into<String>,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<String> {
        self.evaluate(flag_key, default_value.into(), context)
    }

    pub fn object_evaluation(
        &self,
        flag_key: &str,
        default_value: Value,
        context: Option<&EvaluationContext>,
    ) -> EvaluationResult<Value> {
        self.evaluate(flag_key, default_value, context)
    }

    fn publish(&self, event: ProviderEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}

fn send_records<C: KameleoonClient + ?Sized>(client: &C, context: Option<&EvaluationContext>) {
    let records = to_backend_records(context);
    if records.is_empty() {
        return;
    }
    let conversions = records.iter().filter(|r| r.is_conversion()).count();
    debug!(
        conversions,
        custom_data = records.len() - conversions,
        "Sending data records to Kameleoon"
    );
    client.add_data(records);
}
