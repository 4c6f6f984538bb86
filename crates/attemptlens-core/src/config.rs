//! Thresholds, rule weights, and fallback defaults.
//!
//! All values are process-wide constants in production. They live in one
//! injectable struct so tests can override a single threshold without any
//! global state.

/// Weight pair for one mistake pattern's additive rule list.
///
/// Each pattern score is `primary`-weighted when its first condition holds
/// plus `secondary`-weighted when its second condition holds, then clamped.
#[derive(Debug, Clone, Copy)]
pub struct RuleWeights {
    /// Weight added when the pattern's first condition holds.
    pub primary: f64,
    /// Weight added when the pattern's second condition holds.
    pub secondary: f64,
}

/// Configuration for feature extraction, scoring, and classification.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Answers at or under this many seconds count as impulsive.
    pub impulse_time_threshold: f64,
    /// Answers at or over this many seconds count as overthought.
    pub overthink_time_threshold: f64,
    /// Confidence at or above this value counts as high.
    pub high_confidence_threshold: f64,
    /// Fewer eliminations than this count as a weak elimination strategy.
    pub min_effective_eliminations: usize,
    /// Answer changes at or above this count as churn.
    pub multiple_option_changes: u32,

    /// Rule weights for the impulse pattern.
    pub impulse_weights: RuleWeights,
    /// Rule weights for the familiarity pattern.
    pub familiarity_weights: RuleWeights,
    /// Rule weights for the illusion-of-competence pattern.
    pub illusion_weights: RuleWeights,
    /// Rule weights for the elimination-weakness pattern.
    pub elimination_weights: RuleWeights,
    /// Rule weights for the overthinking pattern.
    pub overthinking_weights: RuleWeights,

    /// Confidence used when the label is absent or unrecognized.
    pub default_confidence: f64,
    /// Elimination ratio used when counts are missing or total is zero.
    pub default_elimination_ratio: f64,
    /// Time pressure used when no usable expected time is available.
    pub default_time_pressure: f64,
    /// Revision count at which the normalized revision feature saturates.
    pub max_revision_normalizer: u32,
    /// Revision count assumed when the record carries none.
    pub default_revision_count: u32,
    /// Option count assumed when the record carries none.
    pub default_total_options: u32,

    /// Minimum score for a pattern to qualify as the primary mistake.
    pub primary_score_threshold: f64,
    /// Lead over the runner-up required to call the primary dominant.
    pub dominance_margin: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            impulse_time_threshold: 25.0,
            overthink_time_threshold: 120.0,
            high_confidence_threshold: 0.75,
            min_effective_eliminations: 2,
            multiple_option_changes: 2,
            impulse_weights: RuleWeights {
                primary: 0.5,
                secondary: 0.5,
            },
            familiarity_weights: RuleWeights {
                primary: 0.6,
                secondary: 0.4,
            },
            illusion_weights: RuleWeights {
                primary: 0.7,
                secondary: 0.3,
            },
            elimination_weights: RuleWeights {
                primary: 0.6,
                secondary: 0.4,
            },
            overthinking_weights: RuleWeights {
                primary: 0.6,
                secondary: 0.4,
            },
            default_confidence: 0.5,
            default_elimination_ratio: 0.25,
            default_time_pressure: 0.5,
            max_revision_normalizer: 3,
            default_revision_count: 2,
            default_total_options: 4,
            primary_score_threshold: 0.60,
            dominance_margin: 0.15,
        }
    }
}
