//! Length: word count against the 300-800 word target

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;

/// Count whitespace-delimited words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Scorer for overall resume length
pub struct LengthScorer;

impl LengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LengthScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for LengthScorer {
    fn category(&self) -> Category {
        Category::Length
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let count = count_words(text);

        if count < 100 {
            ScorerOutcome::with_suggestion(
                3,
                "Your resume is very short. Aim for 300–800 words to provide enough detail.",
            )
        } else if count < 200 {
            ScorerOutcome::with_suggestion(
                6,
                "Your resume could use more content. Target at least 300 words.",
            )
        } else if count < 300 {
            ScorerOutcome::with_suggestion(
                10,
                "Consider adding a bit more detail to reach the ideal 300–800 word range.",
            )
        } else if count <= 800 {
            ScorerOutcome::clean(15)
        } else if count <= 1000 {
            ScorerOutcome::with_suggestion(
                12,
                "Your resume is slightly long. Consider trimming to under 800 words for conciseness.",
            )
        } else {
            ScorerOutcome::with_suggestion(
                7,
                "Your resume is too long. Keep it under 800 words to maintain recruiter attention.",
            )
        }
    }
}
