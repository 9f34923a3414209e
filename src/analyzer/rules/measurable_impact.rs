//! Measurable impact: quantified achievements
//!
//! Six pattern families are counted independently and summed. Overlaps are not
//! deduplicated: "40%" counts as a percentage and as a bare two-digit number.

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Pattern sources, one per family. `(?-u:\b)` keeps word boundaries ASCII.
const IMPACT_PATTERNS: [&str; 6] = [
    // percentages
    r"[0-9]+\s*%",
    // dollar amounts
    r"\$[0-9,]+",
    // large numbers
    r"(?i)[0-9]+\s*(?:million|billion|thousand|k(?-u:\b))",
    // impact verb + optional "by" + number
    r"(?i)(?-u:\b)(?:increased|decreased|reduced|improved|grew|boosted|saved|generated|cut)\s+(?:by\s+)?[0-9]+",
    // number + people/entity noun
    r"(?i)[0-9]+\s*(?:users|customers|clients|employees|team members|projects|applications)",
    // any number with two or more digits
    r"(?-u:\b)[0-9]{2,}(?-u:\b)",
];

fn impact_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        IMPACT_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect()
    })
}

/// Total matches across all impact pattern families
pub fn count_impact_matches(text: &str) -> usize {
    impact_patterns()
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
}

/// Scorer for quantified results
pub struct MeasurableImpactScorer;

impl MeasurableImpactScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MeasurableImpactScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for MeasurableImpactScorer {
    fn category(&self) -> Category {
        Category::MeasurableImpact
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let total = count_impact_matches(text);
        log::trace!("measurable impact: {} matches", total);

        if total >= 6 {
            ScorerOutcome::clean(20)
        } else if total >= 4 {
            ScorerOutcome::with_suggestion(
                15,
                "Good quantification. Try adding more specific numbers to your remaining achievements.",
            )
        } else if total >= 2 {
            ScorerOutcome::with_suggestion(
                10,
                "Add more measurable results (percentages, dollar amounts, team sizes) to demonstrate impact.",
            )
        } else {
            ScorerOutcome::with_suggestion(
                4,
                "Your resume lacks quantified achievements. Add numbers like \"Increased revenue by 25%\" or \"Managed a team of 12\".",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(impact_patterns().len(), 6);
    }

    #[test]
    fn percentage_double_counts_with_bare_number() {
        // "40%" matches percentage and two-digit number
        assert_eq!(count_impact_matches("40%"), 2);
        // single digit percent only matches the percentage family
        assert_eq!(count_impact_matches("5 %"), 1);
    }

    #[test]
    fn dollar_amounts() {
        // "$2" only matches the dollar family
        assert_eq!(count_impact_matches("$2M budget"), 1);
        // "$1,500": dollar + bare "500"
        assert_eq!(count_impact_matches("$1,500"), 2);
    }

    #[test]
    fn large_number_words_are_case_insensitive() {
        assert_eq!(count_impact_matches("3 Million"), 1);
        assert_eq!(count_impact_matches("5k"), 1);
        // "5kg": no word boundary after k
        assert_eq!(count_impact_matches("5kg"), 0);
    }

    #[test]
    fn impact_verb_followed_by_number() {
        // "revenue" separates verb and number: only percentage + bare "25"
        assert_eq!(count_impact_matches("Increased revenue by 25%"), 2);
        assert_eq!(count_impact_matches("increased by 25%"), 3);
        assert_eq!(count_impact_matches("cut 3 steps"), 1);
    }

    #[test]
    fn number_followed_by_people() {
        assert_eq!(count_impact_matches("4 users"), 1);
        assert_eq!(count_impact_matches("4 team members"), 1);
        // "+" breaks the people family; only bare "200" counts
        assert_eq!(count_impact_matches("200+ clients"), 1);
    }

    #[test]
    fn bare_numbers_need_two_digits_on_ascii_boundaries() {
        assert_eq!(count_impact_matches("7"), 0);
        assert_eq!(count_impact_matches("2017"), 1);
        assert_eq!(count_impact_matches("v12x"), 0);
    }

    #[test]
    fn thresholds() {
        let scorer = MeasurableImpactScorer::new();
        assert_eq!(scorer.score("nothing here").score, 4);
        assert_eq!(scorer.score("1 thing").score, 4);
        assert_eq!(scorer.score("in 2017").score, 4);
        assert_eq!(scorer.score("40%").score, 10);
        assert_eq!(scorer.score("40% and 50%").score, 15);
        assert_eq!(scorer.score("40% and 50% and 60%").score, 20);
    }
}
