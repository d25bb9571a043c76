//! Evaluation result, reason and error codes.

use serde::Serialize;
use std::fmt;

/// Why an evaluation produced its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Static,
    Default,
    TargetingMatch,
    Split,
    Cached,
    Disabled,
    Unknown,
    Error,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Static => "STATIC",
            Reason::Default => "DEFAULT",
            Reason::TargetingMatch => "TARGETING_MATCH",
            Reason::Split => "SPLIT",
            Reason::Cached => "CACHED",
            Reason::Disabled => "DISABLED",
            Reason::Unknown => "UNKNOWN",
            Reason::Error => "ERROR",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error classification surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ProviderNotReady,
    FlagNotFound,
    ParseError,
    TypeMismatch,
    TargetingKeyMissing,
    InvalidContext,
    General,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ProviderNotReady => "PROVIDER_NOT_READY",
            ErrorCode::FlagNotFound => "FLAG_NOT_FOUND",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::TargetingKeyMissing => "TARGETING_KEY_MISSING",
            ErrorCode::InvalidContext => "INVALID_CONTEXT",
            ErrorCode::General => "GENERAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error code together with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationError {
    pub code: ErrorCode,
    pub message: String,
}

/// Outcome of resolving one flag.
///
/// When `error` is set, `value` is the caller's default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult<T> {
    pub value: T,
    pub variant: Option<String>,
    pub reason: Reason,
    pub error: Option<EvaluationError>,
}

impl<T> EvaluationResult<T> {
    /// Successful static resolution.
    pub fn success(value: T, variant: impl Into<String>) -> Self {
        Self {
            value,
            variant: Some(variant.into()),
            reason: Reason::Static,
            error: None,
        }
    }

    /// Failed resolution carrying the caller's default.
    pub fn error(
        default_value: T,
        variant: Option<String>,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            value: default_value,
            variant,
            reason: Reason::Static,
            error: Some(EvaluationError {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Transform the value, keeping variant, reason and error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> EvaluationResult<U> {
        EvaluationResult {
            value: f(self.value),
            variant: self.variant,
            reason: self.reason,
            error: self.error,
        }
    }
}
