//! Section structure: presence of standard resume sections
//!
//! Synonymous headers collapse into one bucket, so "Experience" and
//! "Work Experience" together count once.

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Recognized section header terms (lowercase)
pub const SECTION_TERMS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "projects",
    "certifications",
    "contact",
    "professional summary",
    "work experience",
    "technical skills",
];

/// Header on its own line: optional indent, the term, then ":" or end of line
fn header_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SECTION_TERMS
            .iter()
            .map(|term| {
                let body = term.split_whitespace().collect::<Vec<_>>().join(r"\s+");
                let re = Regex::new(&format!(r"(?:^|\n)\s*{}\s*(?::|\n|$)", body)).unwrap();
                (*term, re)
            })
            .collect()
    })
}

/// Collapse synonymous terms into one canonical bucket
fn canonical_bucket(term: &'static str) -> &'static str {
    if term.contains("experience") {
        "experience"
    } else if term.contains("skill") {
        "skills"
    } else if term.contains("summary") || term.contains("objective") {
        "summary"
    } else {
        term
    }
}

/// Distinct section buckets present in the text
pub fn section_buckets(text: &str) -> HashSet<&'static str> {
    let lower = text.to_lowercase();
    header_patterns()
        .iter()
        .filter(|(term, re)| lower.contains(*term) || re.is_match(&lower))
        .map(|(term, _)| canonical_bucket(*term))
        .collect()
}

/// Scorer for section organization
pub struct SectionStructureScorer;

impl SectionStructureScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionStructureScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for SectionStructureScorer {
    fn category(&self) -> Category {
        Category::SectionStructure
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let count = section_buckets(text).len();
        log::trace!("section structure: {} buckets", count);

        if count >= 4 {
            ScorerOutcome::clean(15)
        } else if count >= 3 {
            ScorerOutcome::with_suggestion(
                12,
                "Consider adding another section like \"Projects\" or \"Certifications\" to round out your resume.",
            )
        } else if count >= 2 {
            ScorerOutcome::with_suggestion(
                8,
                "Your resume is missing key sections. Include at least: Experience, Education, Skills, and a Summary.",
            )
        } else {
            ScorerOutcome::with_suggestion(
                3,
                "Your resume needs proper section headers (Experience, Education, Skills, Summary) for organization.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_collapse_into_one_bucket() {
        let buckets = section_buckets("Experience\n...\nWork Experience\n...");
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains("experience"));
    }

    #[test]
    fn summary_and_objective_share_a_bucket() {
        let buckets = section_buckets("Objective\nProfessional Summary\nSummary");
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains("summary"));
    }

    #[test]
    fn skill_variants_share_a_bucket() {
        let buckets = section_buckets("Technical Skills: Rust\nSkills: Go");
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains("skills"));
    }

    #[test]
    fn presence_anywhere_counts() {
        let buckets = section_buckets("I have experience with projects and education.");
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn header_pattern_tolerates_line_breaks_inside_terms() {
        let lower = "work\n  experience:\n".to_string();
        let (_, re) = header_patterns()
            .iter()
            .find(|(t, _)| *t == "work experience")
            .unwrap();
        assert!(re.is_match(&lower));
    }

    #[test]
    fn thresholds() {
        let scorer = SectionStructureScorer::new();
        assert_eq!(scorer.score("nothing relevant").score, 3);
        assert_eq!(scorer.score("Experience").score, 3);
        assert_eq!(scorer.score("Experience\nEducation").score, 8);
        assert_eq!(scorer.score("Experience\nEducation\nSkills").score, 12);
        assert_eq!(
            scorer.score("Summary\nExperience\nEducation\nSkills"),
            ScorerOutcome::clean(15)
        );
    }

    #[test]
    fn experience_variants_do_not_inflate_count() {
        let scorer = SectionStructureScorer::new();
        let text = "Experience\nWork Experience\nEducation";
        assert_eq!(scorer.score(text).score, 8);
    }
}
