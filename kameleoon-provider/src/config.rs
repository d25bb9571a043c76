//! Provider configuration.

use crate::error::{ProviderError, Result};
use kameleoon_resolver::ContextPolicy;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Longest visitor code the engine accepts, in bytes.
pub const MAX_VISITOR_CODE_LENGTH: usize = 255;

/// Provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Kameleoon site code.
    pub site_code: String,
    /// Visitor code, when the client is bound to a known visitor.
    pub visitor_code: Option<String>,
    /// Whether resolutions require an evaluation context.
    pub context_policy: ContextPolicy,
    /// How long `initialize` waits for the client.
    pub ready_timeout: Duration,
    /// Capacity of the provider event channel.
    pub event_capacity: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            site_code: String::new(),
            visitor_code: None,
            context_policy: ContextPolicy::Optional,
            ready_timeout: Duration::from_secs(5),
            event_capacity: 16,
        }
    }
}

/// Shape of a TOML configuration document.
#[derive(Debug, Deserialize)]
struct RawConfig {
    site_code: String,
    visitor_code: Option<String>,
    #[serde(default)]
    context_policy: ContextPolicy,
    ready_timeout_ms: Option<u64>,
    event_capacity: Option<usize>,
}

impl ProviderConfig {
    /// Create a new configuration builder.
    pub fn builder(site_code: impl Into<String>) -> ProviderConfigBuilder {
        ProviderConfigBuilder {
            config: ProviderConfig {
                site_code: site_code.into(),
                ..Self::default()
            },
        }
    }

    /// Load from `KAMELEOON_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix("KAMELEOON")
    }

    /// Load from `<PREFIX>_SITE_CODE`, `<PREFIX>_VISITOR_CODE`,
    /// `<PREFIX>_REQUIRE_CONTEXT`, `<PREFIX>_READY_TIMEOUT_MS` and
    /// `<PREFIX>_EVENT_CAPACITY`.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let var = |name: &str| env::var(format!("{prefix}_{name}")).ok();

        let site_code = var("SITE_CODE")
            .ok_or_else(|| ProviderError::Config(format!("{prefix}_SITE_CODE is not set")))?;

        let mut config = ProviderConfig {
            site_code,
            visitor_code: var("VISITOR_CODE"),
            ..Self::default()
        };

        if let Some(require) = var("REQUIRE_CONTEXT")
            && (require == "1" || require.eq_ignore_ascii_case("true"))
        {
            config.context_policy = ContextPolicy::Required;
        }

        if let Some(ms) = var("READY_TIMEOUT_MS") {
            let ms = parse_number::<u64>(&format!("{prefix}_READY_TIMEOUT_MS"), &ms)?;
            config.ready_timeout = Duration::from_millis(ms);
        }

        if let Some(capacity) = var("EVENT_CAPACITY") {
            config.event_capacity =
                parse_number::<usize>(&format!("{prefix}_EVENT_CAPACITY"), &capacity)?;
        }

        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(source).map_err(|e| ProviderError::Config(e.to_string()))?;

        let defaults = Self::default();
        Ok(ProviderConfig {
            site_code: raw.site_code,
            visitor_code: raw.visitor_code,
            context_policy: raw.context_policy,
            ready_timeout: raw
                .ready_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.ready_timeout),
            event_capacity: raw.event_capacity.unwrap_or(defaults.event_capacity),
        })
    }

    /// Check site and visitor codes.
    pub fn validate(&self) -> Result<()> {
        if self.site_code.trim().is_empty() {
            return Err(ProviderError::SiteCodeEmpty);
        }

        if let Some(visitor_code) = &self.visitor_code {
            if visitor_code.is_empty() {
                return Err(ProviderError::VisitorCodeInvalid(
                    "visitor code is empty".to_string(),
                ));
            }
            if visitor_code.len() > MAX_VISITOR_CODE_LENGTH {
                return Err(ProviderError::VisitorCodeInvalid(format!(
                    "visitor code is longer than {MAX_VISITOR_CODE_LENGTH} bytes"
                )));
            }
        }

        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ProviderError::Config(format!("{name} is not a number: {value:?}")))
}

/// Builder for provider configuration.
#[derive(Debug)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Bind the client to a visitor code.
    pub fn visitor_code(mut self, visitor_code: impl Into<String>) -> Self {
        self.config.visitor_code = Some(visitor_code.into());
        self
    }

    /// Set the context policy.
    pub fn context_policy(mut self, policy: ContextPolicy) -> Self {
        self.config.context_policy = policy;
        self
    }

    /// Set how long initialization waits for the client.
    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.config.ready_timeout = timeout;
        self
    }

    /// Set the event channel capacity.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.event_capacity = capacity;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}
