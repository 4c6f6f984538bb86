//! Core data model types for attemptlens.
//!
//! These are the fundamental types the rest of the crate operates on:
//! the raw attempt record as collection layers hand it over, the
//! self-reported confidence bands, and the normalized context the scorer
//! consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw record of a single question attempt, as supplied by the caller.
///
/// Field names match the loose JSON records produced by collection layers;
/// unknown extra keys are ignored on deserialization. Optional fields are
/// `Option`; default substitution happens in the extractor, never here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAttempt {
    /// When the question was shown, in seconds.
    #[serde(default)]
    pub start_time: Option<f64>,
    /// When the answer was submitted, in seconds (same clock as `start_time`).
    #[serde(default)]
    pub submit_time: Option<f64>,
    /// How many times the answer was revised before submission.
    #[serde(default)]
    pub revision_log: Option<u32>,
    /// Total answer options presented for the question.
    #[serde(default)]
    pub total_options: Option<u32>,
    /// Self-reported confidence label ("Low" | "Medium" | "High").
    #[serde(default)]
    pub confidence_input: Option<String>,
    /// Number of options the subject eliminated before answering.
    #[serde(default)]
    pub elimination_options: Option<u32>,
    /// Expected time to answer this question, in seconds.
    #[serde(default)]
    pub expected_time: Option<f64>,
}

/// Self-reported confidence bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    /// Position of this band on the [0, 1] confidence axis.
    pub fn value(self) -> f64 {
        match self {
            ConfidenceLabel::Low => 0.2,
            ConfidenceLabel::Medium => 0.5,
            ConfidenceLabel::High => 0.8,
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::Low => write!(f, "Low"),
            ConfidenceLabel::Medium => write!(f, "Medium"),
            ConfidenceLabel::High => write!(f, "High"),
        }
    }
}

impl FromStr for ConfidenceLabel {
    type Err = String;

    // Labels are matched exactly; anything else is the caller's problem and
    // falls back to the default confidence during extraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ConfidenceLabel::Low),
            "Medium" => Ok(ConfidenceLabel::Medium),
            "High" => Ok(ConfidenceLabel::High),
            other => Err(format!("unknown confidence label: {other}")),
        }
    }
}

/// Normalized context for a single attempt, constructed upstream.
///
/// All numeric fields are assumed already normalized by the caller; the
/// scorer performs no validation beyond what the types guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptContext {
    /// Whether the subject engaged any visible reasoning before answering.
    pub reasoning_started: bool,
    /// Seconds between question shown and answer submitted.
    pub time_taken: f64,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Identifiers of the options eliminated during the attempt.
    #[serde(default)]
    pub options_eliminated: Vec<String>,
    /// Number of times the selected answer changed mid-attempt.
    pub option_changes: u32,
    /// Whether the submitted answer was correct.
    pub is_correct: bool,
}
