//! Engine error types.

use thiserror::Error;

/// Result type for engine calls.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Failures raised by the Kameleoon engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The flag does not exist in the current configuration.
    #[error("Feature flag '{0}' not found")]
    FeatureNotFound(String),

    /// The flag exists but is turned off for the running environment.
    #[error("Feature flag '{flag_key}' is disabled for environment '{environment}'")]
    FeatureEnvironmentDisabled {
        /// Flag key.
        flag_key: String,
        /// Environment name.
        environment: String,
    },

    /// The assigned variation is missing from the flag definition.
    #[error("Variation '{variation_key}' not found for feature flag '{flag_key}'")]
    FeatureVariationNotFound {
        /// Flag key.
        flag_key: String,
        /// Variation key.
        variation_key: String,
    },

    /// Configuration has not been fetched yet.
    #[error("SDK is not ready")]
    NotReady,

    /// The visitor code is empty or too long.
    #[error("Visitor code is invalid: {0}")]
    VisitorCodeInvalid(String),

    /// Any other engine fault.
    #[error("Engine error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Check if this is a feature-level failure (flag absent or disabled).
    pub fn is_feature_error(&self) -> bool {
        matches!(
            self,
            Self::FeatureNotFound(_)
                | Self::FeatureEnvironmentDisabled { .. }
                | Self::FeatureVariationNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_error_classification() {
        assert!(EngineError::FeatureNotFound("f".into()).is_feature_error());
        assert!(
            EngineError::FeatureEnvironmentDisabled {
                flag_key: "f".into(),
                environment: "production".into(),
            }
            .is_feature_error()
        );
        assert!(!EngineError::NotReady.is_feature_error());
        assert!(!EngineError::Internal("boom".into()).is_feature_error());
    }

    #[test]
    fn test_display() {
        let err = EngineError::FeatureNotFound("new-checkout".into());
        assert_eq!(err.to_string(), "Feature flag 'new-checkout' not found");
    }
}
