//! Category scorers for resume quality

pub mod action_verbs;
pub mod bullet_structure;
pub mod length;
pub mod measurable_impact;
pub mod section_structure;
pub mod word_variety;

pub use action_verbs::ActionVerbScorer;
pub use bullet_structure::BulletStructureScorer;
pub use length::LengthScorer;
pub use measurable_impact::MeasurableImpactScorer;
pub use section_structure::SectionStructureScorer;
pub use word_variety::WordVarietyScorer;

use crate::Category;

/// Score and optional suggestion produced by one scorer for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerOutcome {
    pub score: u8,
    pub suggestion: Option<String>,
}

impl ScorerOutcome {
    /// Full marks or no advice needed
    pub fn clean(score: u8) -> Self {
        Self {
            score,
            suggestion: None,
        }
    }

    pub fn with_suggestion(score: u8, suggestion: impl Into<String>) -> Self {
        Self {
            score,
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Trait for category scorers.
///
/// Scorers are stateless and total: any string, including empty or non-ASCII
/// input, yields a score in `0..=category().max_score()`.
pub trait CategoryScorer: Send + Sync {
    /// Category this scorer evaluates
    fn category(&self) -> Category;

    /// Score the raw resume text
    fn score(&self, text: &str) -> ScorerOutcome;
}
