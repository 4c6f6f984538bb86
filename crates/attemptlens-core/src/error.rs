//! Feature extraction error types.
//!
//! Defined as a typed enum so callers can match on the failure mode without
//! string inspection.

use thiserror::Error;

/// Errors that can occur while extracting features from a raw attempt.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A field with no default was absent from the record.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The attempt was submitted before it started.
    #[error("submit_time {submit} precedes start_time {start}")]
    NegativeDuration { start: f64, submit: f64 },

    /// The assembled vector does not carry the expected number of features.
    #[error("feature vector must contain exactly {expected} features, got {actual}")]
    WrongArity { expected: usize, actual: usize },

    /// A computed feature is NaN or infinite.
    #[error("feature '{feature}' is not finite")]
    NonFinite { feature: &'static str },

    /// A bounded feature escaped [0, 1].
    #[error("feature '{feature}' out of range [0, 1]: {value}")]
    OutOfRange { feature: &'static str, value: f64 },
}

impl FeatureError {
    /// Returns `true` if the error is caused by the input record rather
    /// than by an integrity defect in the assembled vector.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FeatureError::MissingField(_) | FeatureError::NegativeDuration { .. }
        )
    }
}
