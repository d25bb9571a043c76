//! Provider status, events and metadata.

use serde::Serialize;

/// Provider name reported to the host framework.
pub const PROVIDER_NAME: &str = "Kameleoon Provider";

/// Provider metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub name: &'static str,
}

impl Default for ProviderMetadata {
    fn default() -> Self {
        Self {
            name: PROVIDER_NAME,
        }
    }
}

/// Current provider status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderStatus {
    NotReady,
    Ready,
    /// The client has been released
    Stale,
}

/// Lifecycle events published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "message", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderEvent {
    Ready,
    Error(String),
    Stale,
}
