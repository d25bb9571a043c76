//! Provider error types.

use kameleoon_resolver::EngineError;
use std::time::Duration;
use thiserror::Error;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Provider errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// No site code configured.
    #[error("Site code is empty")]
    SiteCodeEmpty,

    /// Visitor code is empty or longer than 255 bytes.
    #[error("Visitor code is invalid: {0}")]
    VisitorCodeInvalid(String),

    /// The provider has been shut down.
    #[error("Provider is not ready")]
    NotReady,

    /// The client did not become ready in time.
    #[error("Client was not ready after {0:?}")]
    ReadyTimeout(Duration),

    /// Malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ProviderError {
    /// Check if this error comes from configuration rather than the engine.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::SiteCodeEmpty | Self::VisitorCodeInvalid(_) | Self::Config(_)
        )
    }
}
