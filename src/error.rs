//! Error types for KyroEval.
//!
//! All errors in KyroEval are strongly typed using thiserror.
//! Every failure is a deterministic input-validity failure: nothing here is
//! transient, so nothing is retried.

use thiserror::Error;

/// Errors detected at the input boundary, before any pipeline stage runs.
#[derive(Debug, Error)]
pub enum InputShapeError {
    #[error("Malformed input record: {message}")]
    Malformed {
        message: String,
    },

    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },

    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    FieldTooLong {
        field: String,
        max_length: usize,
    },

    #[error("Field '{field}' holds more than {max_items} items")]
    TooManyItems {
        field: String,
        max_items: usize,
    },
}

/// Errors raised while loading or validating an
/// [`EvaluationConfig`](crate::config::EvaluationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {message}")]
    Io {
        path: String,
        message: String,
    },

    #[error("Malformed config: {message}")]
    Malformed {
        message: String,
    },

    #[error("Weight {weight} for source type '{source_type}' is out of range [0.0, 1.0]")]
    InvalidWeight {
        source_type: String,
        weight: f32,
    },

    #[error("Invalid threshold '{name}': {reason}")]
    InvalidThreshold {
        name: String,
        reason: String,
    },
}

/// Top-level error type for KyroEval.
///
/// The coordinator surfaces component failures through this enum unchanged.
#[derive(Debug, Error)]
pub enum KyroEvalError {
    #[error("Input shape error: {0}")]
    InputShape(#[from] InputShapeError),

    #[error("Insufficient data: {reason}")]
    InsufficientData {
        reason: String,
    },

    #[error("Malformed claim: {reason}")]
    MalformedClaim {
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl KyroEvalError {
    /// Creates an insufficient-data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Creates a malformed-claim error.
    #[must_use]
    pub fn malformed_claim(reason: impl Into<String>) -> Self {
        Self::MalformedClaim {
            reason: reason.into(),
        }
    }

    /// Returns true if this is an input shape error.
    #[must_use]
    pub const fn is_input_shape(&self) -> bool {
        matches!(self, Self::InputShape(_))
    }

    /// Returns true if the evidence base was empty.
    #[must_use]
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }

    /// Returns true if the claim under test was unusable.
    #[must_use]
    pub const fn is_malformed_claim(&self) -> bool {
        matches!(self, Self::MalformedClaim { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this error is retryable.
    ///
    /// Evaluation is a pure function of its input, so retrying the same
    /// input always fails the same way.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type alias for KyroEval operations.
pub type KyroEvalResult<T> = Result<T, KyroEvalError>;
