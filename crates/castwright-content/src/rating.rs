//! Script rating criteria and weighted scoring

use indexmap::IndexMap;
use serde::Serialize;

/// One row of the fixed rating table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingCriterion {
    pub name: &'static str,
    pub weight: f64,
    pub description: &'static str,
}

/// Fixed rating table; weights sum to 1.0
pub const CRITERIA: &[RatingCriterion] = &[
    RatingCriterion {
        name: "Engagement",
        weight: 0.25,
        description: "How well the script holds listener attention",
    },
    RatingCriterion {
        name: "Personal Connection",
        weight: 0.20,
        description: "Stories, anecdotes and relatable moments",
    },
    RatingCriterion {
        name: "Expertise",
        weight: 0.20,
        description: "Depth and accuracy of the subject matter",
    },
    RatingCriterion {
        name: "Structure",
        weight: 0.15,
        description: "Logical flow, pacing and transitions",
    },
    RatingCriterion {
        name: "Authenticity",
        weight: 0.20,
        description: "Natural, conversational voice of the hosts",
    },
];

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// Score given to every criterion when no upstream rating is available
pub const FALLBACK_SCORE: f64 = 3.0;

/// Look up a criterion by name, ignoring case and surrounding whitespace
pub fn criterion(name: &str) -> Option<&'static RatingCriterion> {
    let name = name.trim();
    CRITERIA.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Weighted sum of the present scores over the fixed weight table
///
/// Criteria missing from `scores` contribute nothing; the remaining weights
/// are not renormalised. Result is rounded to one decimal place.
pub fn weighted_score(scores: &IndexMap<String, f64>) -> f64 {
    let total: f64 = CRITERIA
        .iter()
        .filter_map(|c| scores.get(c.name).map(|score| score * c.weight))
        .sum();

    round_one_decimal(total)
}

/// Clamp a raw score into the valid range
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Every criterion at the fallback score
pub fn fallback_scores() -> IndexMap<String, f64> {
    CRITERIA
        .iter()
        .map(|c| (c.name.to_owned(), FALLBACK_SCORE))
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
