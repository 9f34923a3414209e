//! Action verbs: distinct strong verbs from a fixed dictionary

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Strong resume action verbs, matched as whole lowercase tokens
pub const STRONG_ACTION_VERBS: &[&str] = &[
    "achieved", "accelerated", "accomplished", "administered", "advanced",
    "analyzed", "architected", "automated", "boosted", "built",
    "championed", "consolidated", "coordinated", "created", "cultivated",
    "decreased", "delivered", "designed", "developed", "directed",
    "doubled", "drove", "eliminated", "engineered", "established",
    "exceeded", "executed", "expanded", "facilitated", "generated",
    "grew", "headed", "implemented", "improved", "increased",
    "initiated", "innovated", "introduced", "launched", "led",
    "managed", "maximized", "mentored", "modernized", "negotiated",
    "optimized", "orchestrated", "overhauled", "partnered", "pioneered",
    "produced", "propelled", "reduced", "reformed", "resolved",
    "revamped", "scaled", "secured", "simplified", "spearheaded",
    "streamlined", "strengthened", "supervised", "surpassed", "transformed",
    "tripled", "unified", "upgraded",
];

fn verb_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STRONG_ACTION_VERBS.iter().copied().collect())
}

/// Distinct dictionary verbs found in the text (whole tokens, case-insensitive)
pub fn distinct_action_verbs(text: &str) -> HashSet<String> {
    let verbs = verb_set();
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| verbs.contains(w))
        .map(str::to_string)
        .collect()
}

/// Scorer for strong action verb usage
pub struct ActionVerbScorer;

impl ActionVerbScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ActionVerbScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for ActionVerbScorer {
    fn category(&self) -> Category {
        Category::ActionVerbs
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let found = distinct_action_verbs(text).len();
        log::trace!("action verbs: {} distinct", found);

        if found >= 8 {
            ScorerOutcome::clean(20)
        } else if found >= 5 {
            ScorerOutcome::with_suggestion(
                15,
                "Good verb usage! Try adding a few more strong action verbs like \"spearheaded\" or \"optimized\".",
            )
        } else if found >= 2 {
            ScorerOutcome::with_suggestion(
                10,
                "Include more strong action verbs (e.g., \"achieved\", \"implemented\", \"streamlined\") to strengthen your impact.",
            )
        } else {
            ScorerOutcome::with_suggestion(
                4,
                "Your resume lacks strong action verbs. Start bullet points with words like \"Led\", \"Designed\", \"Increased\", \"Automated\".",
            )
        }
    }
}
