//! Attempt feature extraction.
//!
//! Turns a raw attempt record into the 8-feature normalized vector consumed
//! by downstream models. Extraction either fully succeeds or fails before
//! any output is returned; it never yields a partially-populated vector.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::FeatureError;
use crate::model::{ConfidenceLabel, RawAttempt};

/// Number of features in a complete vector.
pub const FEATURE_COUNT: usize = 8;

/// Normalized features derived from one attempt.
///
/// Every field except `time_taken` lies in [0, 1]; `time_taken` is an
/// unbounded non-negative duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Seconds between question shown and answer submitted.
    pub time_taken: f64,
    /// Numeric confidence mapped from the self-reported label.
    pub confidence_level: f64,
    /// Fraction of options eliminated before answering.
    pub elimination_ratio: f64,
    /// Revision count normalized against the saturation cap.
    pub revision_count: f64,
    /// Fraction of the optional context fields the record supplied.
    pub data_completeness: f64,
    /// How far under the expected time the answer landed.
    pub time_pressure: f64,
    /// High when confident and answered well under expected time.
    pub confidence_time_conflict: f64,
    /// High when confident yet revising heavily.
    pub revision_after_confidence: f64,
}

impl FeatureVector {
    /// Feature name/value pairs in canonical order.
    pub fn entries(&self) -> [(&'static str, f64); FEATURE_COUNT] {
        [
            ("time_taken", self.time_taken),
            ("confidence_level", self.confidence_level),
            ("elimination_ratio", self.elimination_ratio),
            ("revision_count", self.revision_count),
            ("data_completeness", self.data_completeness),
            ("time_pressure", self.time_pressure),
            ("confidence_time_conflict", self.confidence_time_conflict),
            ("revision_after_confidence", self.revision_after_confidence),
        ]
    }

    /// The vector as a flat name → value mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.entries().into_iter().collect()
    }

    /// Check vector integrity: arity, finiteness, and bounds.
    ///
    /// Unreachable with correct arithmetic, but guards against future
    /// field-count drift. `time_taken` is exempt from the [0, 1] bound.
    pub fn validate(&self) -> Result<(), FeatureError> {
        let entries = self.entries();
        if entries.len() != FEATURE_COUNT {
            return Err(FeatureError::WrongArity {
                expected: FEATURE_COUNT,
                actual: entries.len(),
            });
        }
        for (feature, value) in entries {
            if !value.is_finite() {
                return Err(FeatureError::NonFinite { feature });
            }
            if feature != "time_taken" && !(0.0..=1.0).contains(&value) {
                return Err(FeatureError::OutOfRange { feature, value });
            }
        }
        Ok(())
    }
}

/// Saturate a ratio into [0, 1] instead of erroring on overflow.
fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Extracts normalized feature vectors from raw attempt records.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: AnalysisConfig,
}

impl FeatureExtractor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Extract all 8 features from a raw attempt record.
    pub fn extract(&self, attempt: &RawAttempt) -> Result<FeatureVector, FeatureError> {
        let time_taken = self.time_taken(attempt)?;
        let confidence_level = self.confidence_level(attempt);
        let elimination_ratio = self.elimination_ratio(attempt);
        let revision_count = self.revision_count(attempt);

        let time_pressure = self.time_pressure(time_taken, attempt);
        let confidence_time_conflict = clamp(confidence_level * time_pressure);
        let revision_after_confidence = clamp(confidence_level * revision_count);

        let data_completeness = data_completeness(attempt);

        let vector = FeatureVector {
            time_taken,
            confidence_level,
            elimination_ratio,
            revision_count,
            data_completeness,
            time_pressure,
            confidence_time_conflict,
            revision_after_confidence,
        };
        vector.validate()?;

        Ok(vector)
    }

    fn time_taken(&self, attempt: &RawAttempt) -> Result<f64, FeatureError> {
        let start = attempt
            .start_time
            .ok_or(FeatureError::MissingField("start_time"))?;
        let submit = attempt
            .submit_time
            .ok_or(FeatureError::MissingField("submit_time"))?;

        if submit < start {
            return Err(FeatureError::NegativeDuration { start, submit });
        }

        Ok(submit - start)
    }

    fn confidence_level(&self, attempt: &RawAttempt) -> f64 {
        match attempt.confidence_input.as_deref() {
            Some(label) => match ConfidenceLabel::from_str(label) {
                Ok(band) => band.value(),
                Err(_) => {
                    tracing::warn!("unrecognized confidence label '{label}', using default");
                    self.config.default_confidence
                }
            },
            None => self.config.default_confidence,
        }
    }

    fn elimination_ratio(&self, attempt: &RawAttempt) -> f64 {
        let total = attempt
            .total_options
            .unwrap_or(self.config.default_total_options);

        match attempt.elimination_options {
            // Guards divide-by-zero when a record claims zero options
            Some(eliminated) if total > 0 => clamp(f64::from(eliminated) / f64::from(total)),
            _ => {
                tracing::debug!("elimination counts unusable, using default ratio");
                self.config.default_elimination_ratio
            }
        }
    }

    fn revision_count(&self, attempt: &RawAttempt) -> f64 {
        let revisions = attempt
            .revision_log
            .unwrap_or(self.config.default_revision_count);
        // Saturates above the cap rather than erroring
        clamp(f64::from(revisions) / f64::from(self.config.max_revision_normalizer))
    }

    fn time_pressure(&self, time_taken: f64, attempt: &RawAttempt) -> f64 {
        match attempt.expected_time {
            Some(expected) if expected > 0.0 => 1.0 - clamp(time_taken / expected),
            _ => {
                tracing::debug!("no usable expected_time, using default time pressure");
                self.config.default_time_pressure
            }
        }
    }
}

/// Fraction of the optional context fields the record actually supplied.
fn data_completeness(attempt: &RawAttempt) -> f64 {
    let supplied = [
        attempt.confidence_input.is_some(),
        attempt.elimination_options.is_some(),
        attempt.expected_time.is_some(),
    ];
    let provided = supplied.iter().filter(|present| **present).count();

    provided as f64 / supplied.len() as f64
}

/// Extract features with the default configuration.
pub fn extract_features(attempt: &RawAttempt) -> Result<FeatureVector, FeatureError> {
    FeatureExtractor::default().extract(attempt)
}
