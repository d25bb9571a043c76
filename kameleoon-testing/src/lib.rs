//! Testing utilities for the Kameleoon OpenFeature adapter.
//!
//! - [`MockClient`] - scripted variations and failures, call recording,
//!   captured data records and configurable readiness
//! - [`MockLookup`] - scripted engine of the key-then-variables style
//!
//! ## Quick Start
//!
//! ```
//! use kameleoon_resolver::{EngineError, FeatureEngine};
//! use kameleoon_testing::MockClient;
//! use kameleoon_types::{Variable, Variation};
//!
//! let client = MockClient::new()
//!     .with_variation("banner", Variation::new("blue").with_variable(Variable::typed("color", "#00f")))
//!     .with_error("legacy", EngineError::Internal("offline".into()));
//!
//! assert_eq!(client.get_variation("banner").unwrap().key, "blue");
//! assert!(client.get_variation("legacy").is_err());
//! assert_eq!(client.call_count(), 2);
//! ```

pub mod mock;

pub use mock::{MockClient, MockLookup};
