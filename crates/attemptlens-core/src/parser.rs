//! Loose attempt-record parsing and inspection.
//!
//! Deserializes caller-supplied JSON records into [`RawAttempt`] and reports
//! the oddities the extractor will later coerce silently, so collection
//! layers can log or surface them before extraction runs.

use anyhow::{Context, Result};
use serde_json::Value;
use std::str::FromStr;

use crate::config::AnalysisConfig;
use crate::model::{ConfidenceLabel, RawAttempt};

/// Parse a JSON attempt record.
pub fn parse_attempt_str(content: &str) -> Result<RawAttempt> {
    serde_json::from_str(content).context("failed to parse attempt record")
}

/// Convert an in-memory JSON value into an attempt record.
pub fn parse_attempt_value(value: Value) -> Result<RawAttempt> {
    serde_json::from_value(value).context("failed to convert attempt record")
}

/// A non-fatal finding about an attempt record.
#[derive(Debug, Clone)]
pub struct RecordWarning {
    /// The field the finding concerns, if any.
    pub field: Option<&'static str>,
    /// Warning message.
    pub message: String,
}

/// Inspect a record for values the extractor will silently coerce.
///
/// Never blocks extraction; hard failures (missing timestamps, negative
/// duration) stay with the extractor itself.
pub fn inspect_attempt(raw: &RawAttempt, config: &AnalysisConfig) -> Vec<RecordWarning> {
    let mut warnings = Vec::new();

    if let Some(label) = &raw.confidence_input {
        if ConfidenceLabel::from_str(label).is_err() {
            warnings.push(RecordWarning {
                field: Some("confidence_input"),
                message: format!("unrecognized confidence label: {label}"),
            });
        }
    }

    if let Some(expected) = raw.expected_time {
        if expected <= 0.0 {
            warnings.push(RecordWarning {
                field: Some("expected_time"),
                message: format!(
                    "expected_time {expected} is not positive; time pressure will use the default"
                ),
            });
        }
    }

    if let Some(revisions) = raw.revision_log {
        if revisions > config.max_revision_normalizer {
            warnings.push(RecordWarning {
                field: Some("revision_log"),
                message: format!(
                    "revision_log {revisions} exceeds the normalizer cap of {} and will saturate",
                    config.max_revision_normalizer
                ),
            });
        }
    }

    let total = raw.total_options.unwrap_or(config.default_total_options);
    if total == 0 {
        warnings.push(RecordWarning {
            field: Some("total_options"),
            message: "total_options is zero; elimination ratio will use the default".into(),
        });
    } else if let Some(eliminated) = raw.elimination_options {
        if eliminated > total {
            warnings.push(RecordWarning {
                field: Some("elimination_options"),
                message: format!(
                    "elimination_options {eliminated} exceeds total_options {total}"
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RECORD: &str = r#"{
        "start_time": 0.0,
        "submit_time": 45.0,
        "revision_log": 1,
        "total_options": 4,
        "confidence_input": "Medium",
        "elimination_options": 2,
        "expected_time": 60.0
    }"#;

    #[test]
    fn parse_valid_record() {
        let raw = parse_attempt_str(VALID_RECORD).unwrap();
        assert_eq!(raw.submit_time, Some(45.0));
        assert_eq!(raw.confidence_input.as_deref(), Some("Medium"));
        assert!(inspect_attempt(&raw, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn parse_malformed_json() {
        assert!(parse_attempt_str("not json {").is_err());
    }

    #[test]
    fn parse_from_value() {
        let value = serde_json::json!({
            "start_time": 10.0,
            "submit_time": 20.0,
            "confidence_input": "High"
        });
        let raw = parse_attempt_value(value).unwrap();
        assert_eq!(raw.confidence_input.as_deref(), Some("High"));
    }

    #[test]
    fn inspect_flags_unknown_label() {
        let raw = RawAttempt {
            confidence_input: Some("Very High".into()),
            ..RawAttempt::default()
        };
        let warnings = inspect_attempt(&raw, &AnalysisConfig::default());
        assert!(warnings
            .iter()
            .any(|w| w.field == Some("confidence_input")));
    }

    #[test]
    fn inspect_flags_saturating_revisions_and_bad_expected_time() {
        let raw = RawAttempt {
            revision_log: Some(9),
            expected_time: Some(0.0),
            ..RawAttempt::default()
        };
        let warnings = inspect_attempt(&raw, &AnalysisConfig::default());
        assert!(warnings.iter().any(|w| w.field == Some("revision_log")));
        assert!(warnings.iter().any(|w| w.field == Some("expected_time")));
    }

    #[test]
    fn inspect_flags_elimination_overflow_against_defaulted_total() {
        // total_options absent defaults to 4, so 6 eliminations overflow
        let raw = RawAttempt {
            elimination_options: Some(6),
            ..RawAttempt::default()
        };
        let warnings = inspect_attempt(&raw, &AnalysisConfig::default());
        assert!(warnings
            .iter()
            .any(|w| w.field == Some("elimination_options")));
    }

    #[test]
    fn inspect_flags_zero_total_options() {
        let raw = RawAttempt {
            total_options: Some(0),
            elimination_options: Some(1),
            ..RawAttempt::default()
        };
        let warnings = inspect_attempt(&raw, &AnalysisConfig::default());
        assert!(warnings.iter().any(|w| w.field == Some("total_options")));
    }
}
