//! Mistake-pattern scoring over a prepared attempt context.
//!
//! Each score is a clamped sum of two independent fixed-weight indicators,
//! which keeps every score auditable: 1.0 means both contributing
//! conditions held, 0.0 means neither did.

use serde::{Deserialize, Serialize};

use crate::classifier::MistakePattern;
use crate::config::AnalysisConfig;
use crate::model::AttemptContext;

/// Per-pattern scores for one attempt, each in [0, 1].
///
/// The five axes are independent; they are not a probability distribution
/// and carry no sum invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    /// Answered fast without visible reasoning.
    pub impulse_score: f64,
    /// High confidence driven by surface familiarity.
    pub familiarity_score: f64,
    /// High confidence paired with a wrong answer.
    pub illusion_score: f64,
    /// Too few options ruled out before answering.
    pub elimination_weakness_score: f64,
    /// Excessive time and answer churn.
    pub overthinking_score: f64,
}

impl ScoreProfile {
    /// Pattern/score pairs in declaration order.
    pub fn entries(&self) -> [(MistakePattern, f64); 5] {
        [
            (MistakePattern::Impulse, self.impulse_score),
            (MistakePattern::Familiarity, self.familiarity_score),
            (MistakePattern::IllusionOfCompetence, self.illusion_score),
            (
                MistakePattern::EliminationWeakness,
                self.elimination_weakness_score,
            ),
            (MistakePattern::Overthinking, self.overthinking_score),
        ]
    }
}

/// Ensure scores stay within [0.0, 1.0].
fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Scores attempt contexts against the configured thresholds.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: AnalysisConfig,
}

impl Scorer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Compute all five mistake-pattern scores for one attempt.
    ///
    /// Pure and infallible: any well-typed context produces a profile. The
    /// default weights already keep each unclamped sum within [0, 1]; the
    /// clamp is part of the contract regardless.
    pub fn score(&self, context: &AttemptContext) -> ScoreProfile {
        let cfg = &self.config;

        let mut impulse_score = 0.0;
        if !context.reasoning_started {
            impulse_score += cfg.impulse_weights.primary;
        }
        if context.time_taken <= cfg.impulse_time_threshold {
            impulse_score += cfg.impulse_weights.secondary;
        }

        let mut familiarity_score = 0.0;
        if context.confidence >= cfg.high_confidence_threshold {
            familiarity_score += cfg.familiarity_weights.primary;
        }
        if !context.reasoning_started {
            familiarity_score += cfg.familiarity_weights.secondary;
        }

        let mut illusion_score = 0.0;
        if context.confidence >= cfg.high_confidence_threshold && !context.is_correct {
            illusion_score += cfg.illusion_weights.primary;
        }
        if context.reasoning_started {
            illusion_score += cfg.illusion_weights.secondary;
        }

        let mut elimination_weakness_score = 0.0;
        if context.options_eliminated.len() < cfg.min_effective_eliminations {
            elimination_weakness_score += cfg.elimination_weights.primary;
        }
        if context.reasoning_started {
            elimination_weakness_score += cfg.elimination_weights.secondary;
        }

        let mut overthinking_score = 0.0;
        if context.time_taken >= cfg.overthink_time_threshold {
            overthinking_score += cfg.overthinking_weights.primary;
        }
        if context.option_changes >= cfg.multiple_option_changes {
            overthinking_score += cfg.overthinking_weights.secondary;
        }

        ScoreProfile {
            impulse_score: clamp(impulse_score),
            familiarity_score: clamp(familiarity_score),
            illusion_score: clamp(illusion_score),
            elimination_weakness_score: clamp(elimination_weakness_score),
            overthinking_score: clamp(overthinking_score),
        }
    }
}

/// Score an attempt with the default configuration.
pub fn score_attempt(context: &AttemptContext) -> ScoreProfile {
    Scorer::default().score(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AttemptContext {
        AttemptContext {
            reasoning_started: true,
            time_taken: 60.0,
            confidence: 0.5,
            options_eliminated: vec!["B".into(), "C".into()],
            option_changes: 0,
            is_correct: true,
        }
    }

    #[test]
    fn fast_unreasoned_confident_answer_maxes_impulse_and_familiarity() {
        let profile = score_attempt(&AttemptContext {
            reasoning_started: false,
            time_taken: 10.0,
            confidence: 0.8,
            ..context()
        });
        assert!((profile.impulse_score - 1.0).abs() < f64::EPSILON);
        assert!((profile.familiarity_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confident_wrong_answer_with_reasoning_maxes_illusion() {
        let profile = score_attempt(&AttemptContext {
            reasoning_started: true,
            confidence: 0.8,
            is_correct: false,
            ..context()
        });
        assert!((profile.illusion_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_elimination_with_reasoning_maxes_elimination_weakness() {
        let profile = score_attempt(&AttemptContext {
            reasoning_started: true,
            options_eliminated: vec!["D".into()],
            ..context()
        });
        assert!((profile.elimination_weakness_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn slow_churning_answer_maxes_overthinking() {
        let profile = score_attempt(&AttemptContext {
            time_taken: 150.0,
            option_changes: 3,
            ..context()
        });
        assert!((profile.overthinking_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unruffled_attempt_scores_partial_or_zero() {
        // Reasoned, unhurried, modest confidence, two eliminations, correct
        let profile = score_attempt(&context());
        assert_eq!(profile.impulse_score, 0.0);
        assert_eq!(profile.familiarity_score, 0.0);
        // Reasoning alone contributes the secondary illusion weight
        assert!((profile.illusion_score - 0.3).abs() < f64::EPSILON);
        assert!((profile.elimination_weakness_score - 0.4).abs() < f64::EPSILON);
        assert_eq!(profile.overthinking_score, 0.0);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let at_impulse = score_attempt(&AttemptContext {
            reasoning_started: true,
            time_taken: 25.0,
            ..context()
        });
        assert!((at_impulse.impulse_score - 0.5).abs() < f64::EPSILON);

        let at_overthink = score_attempt(&AttemptContext {
            time_taken: 120.0,
            ..context()
        });
        assert!((at_overthink.overthinking_score - 0.6).abs() < f64::EPSILON);

        let at_high_confidence = score_attempt(&AttemptContext {
            confidence: 0.75,
            is_correct: false,
            ..context()
        });
        assert!((at_high_confidence.illusion_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_scores_stay_in_unit_range_across_input_grid() {
        let scorer = Scorer::default();
        let option_ids = ["A", "B", "C", "D"];
        for reasoning_started in [false, true] {
            for is_correct in [false, true] {
                for time_taken in [0.0, 24.9, 25.0, 60.0, 120.0, 500.0] {
                    for confidence in [0.0, 0.2, 0.5, 0.74, 0.75, 1.0] {
                        for eliminated in 0..=4usize {
                            for option_changes in [0, 1, 2, 5] {
                                let profile = scorer.score(&AttemptContext {
                                    reasoning_started,
                                    time_taken,
                                    confidence,
                                    options_eliminated: option_ids[..eliminated]
                                        .iter()
                                        .map(|id| id.to_string())
                                        .collect(),
                                    option_changes,
                                    is_correct,
                                });
                                for (pattern, score) in profile.entries() {
                                    assert!(
                                        (0.0..=1.0).contains(&score),
                                        "{pattern} escaped unit range: {score}"
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn custom_config_shifts_thresholds() {
        let scorer = Scorer::new(AnalysisConfig {
            impulse_time_threshold: 5.0,
            ..AnalysisConfig::default()
        });
        let profile = scorer.score(&AttemptContext {
            reasoning_started: true,
            time_taken: 10.0,
            ..context()
        });
        // 10s is no longer impulsive under the tightened threshold
        assert_eq!(profile.impulse_score, 0.0);
    }
}
