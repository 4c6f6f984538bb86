//! Ranking of mistake-pattern scores into a primary classification.
//!
//! The scorer produces five independent axes; downstream consumers usually
//! want to know which single pattern, if any, explains the attempt. A
//! pattern qualifies as primary when its score clears the primary threshold,
//! and is dominant when it also leads the runner-up by the dominance margin.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::scorer::ScoreProfile;

/// The five behavioral mistake patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MistakePattern {
    Impulse,
    Familiarity,
    IllusionOfCompetence,
    EliminationWeakness,
    Overthinking,
}

impl fmt::Display for MistakePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MistakePattern::Impulse => write!(f, "impulse"),
            MistakePattern::Familiarity => write!(f, "familiarity"),
            MistakePattern::IllusionOfCompetence => write!(f, "illusion_of_competence"),
            MistakePattern::EliminationWeakness => write!(f, "elimination_weakness"),
            MistakePattern::Overthinking => write!(f, "overthinking"),
        }
    }
}

impl FromStr for MistakePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "impulse" => Ok(MistakePattern::Impulse),
            "familiarity" => Ok(MistakePattern::Familiarity),
            "illusion_of_competence" => Ok(MistakePattern::IllusionOfCompetence),
            "elimination_weakness" => Ok(MistakePattern::EliminationWeakness),
            "overthinking" => Ok(MistakePattern::Overthinking),
            other => Err(format!("unknown mistake pattern: {other}")),
        }
    }
}

/// Outcome of ranking a score profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistakeClassification {
    /// Patterns ordered by descending score; declaration order breaks ties.
    pub ranked: Vec<(MistakePattern, f64)>,
    /// Highest-scoring pattern, if it clears the primary threshold.
    pub primary: Option<MistakePattern>,
    /// Whether the primary leads the runner-up by the dominance margin.
    pub dominant: bool,
}

/// Rank a profile's patterns and pick the primary mistake, if any.
pub fn classify_profile(
    profile: &ScoreProfile,
    config: &AnalysisConfig,
) -> MistakeClassification {
    let mut ranked: Vec<(MistakePattern, f64)> = profile.entries().to_vec();
    // Stable sort keeps declaration order for equal scores
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let (top_pattern, top_score) = ranked[0];
    let primary = (top_score >= config.primary_score_threshold).then_some(top_pattern);
    let dominant = primary.is_some() && (top_score - ranked[1].1) >= config.dominance_margin;

    MistakeClassification {
        ranked,
        primary,
        dominant,
    }
}
