//! Kameleoon OpenFeature Provider
//!
//! Lifecycle object that owns a Kameleoon client and exposes typed flag
//! evaluations with OpenFeature semantics.
//!
//! # Features
//!
//! - **Typed evaluations** - boolean, integer, double, string and object flags
//! - **Data forwarding** - `conversion` / `customData` context attributes are
//!   sent to the client on initialization and on context changes
//! - **Lifecycle events** - `Ready`, `Error` and `Stale` over a broadcast
//!   channel
//! - **Configuration** - builder, environment variables or TOML
//!
//! # Quick Start
//!
//! ```
//! use kameleoon_provider::*;
//! use kameleoon_testing::MockClient;
//! use kameleoon_types::*;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let client = Arc::new(
//!     MockClient::new()
//!         .ready(true)
//!         .with_variation("new-ui", Variation::new("on").with_variable(Variable::typed("enabled", true))),
//! );
//!
//! let config = ProviderConfig::builder("my-site-code").build();
//! let provider = KameleoonProvider::new(config, client.clone()).unwrap();
//!
//! let context = EvaluationContext::with_targeting_key("visitor-1")
//!     .with_data(DataType::Conversion, DataType::make_goal_conversion(42));
//! provider.initialize(Some(&context)).await.unwrap();
//! assert_eq!(client.recorded_data(), vec![NativeDataRecord::conversion(42, 0.0)]);
//!
//! let result = provider.boolean_evaluation("new-ui", false, Some(&context));
//! assert!(result.value);
//! # });
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod status;

pub use client::KameleoonClient;
pub use config::{MAX_VISITOR_CODE_LENGTH, ProviderConfig, ProviderConfigBuilder};
pub use error::{ProviderError, Result};
pub use provider::KameleoonProvider;
pub use status::{PROVIDER_NAME, ProviderEvent, ProviderMetadata, ProviderStatus};
