//! Resume Score: rule-based resume analysis
//!
//! This library scores free-form resume text against six weighted heuristics
//! and produces a total score, a per-category breakdown, and actionable
//! suggestions for improvement.

pub mod analyzer;
pub mod config;
pub mod history;
pub mod ingest;
pub mod keywords;
pub mod reporter;
pub mod sample;
pub mod watcher;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use analyzer::engine::ScoringEngine;

/// Suggestion returned when there is nothing to analyze
pub const EMPTY_INPUT_SUGGESTION: &str = "Please paste your resume text to get started.";

/// The result of scoring one resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sum of all category scores (0-100)
    pub total_score: u8,
    /// Per-category scores in fixed order; empty when the input was blank
    pub categories: Vec<CategoryScore>,
    /// Improvement suggestions in category order
    pub suggestions: Vec<String>,
    /// Whitespace-delimited word count of the input
    #[serde(default)]
    pub word_count: usize,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only input
    pub fn empty() -> Self {
        Self {
            total_score: 0,
            categories: Vec::new(),
            suggestions: vec![EMPTY_INPUT_SUGGESTION.to_string()],
            word_count: 0,
        }
    }

    /// True when the input was blank and no categories were scored
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.total_score)
    }

    /// Look up a category by its display name
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Score for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Display name (e.g. "Action Verbs")
    pub name: String,
    /// Points earned (0..=max_score)
    pub score: u8,
    /// Maximum points for this category
    pub max_score: u8,
    /// What the category measures
    pub description: String,
}

impl CategoryScore {
    pub fn new(category: Category, score: u8) -> Self {
        debug_assert!(score <= category.max_score());
        Self {
            name: category.name().to_string(),
            score: score.min(category.max_score()),
            max_score: category.max_score(),
            description: category.description().to_string(),
        }
    }

    /// Fraction of the category maximum earned (0.0-1.0)
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        self.score as f64 / self.max_score as f64
    }
}

/// The six scoring categories, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Length,
    BulletStructure,
    ActionVerbs,
    MeasurableImpact,
    SectionStructure,
    WordVariety,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::BulletStructure,
        Category::ActionVerbs,
        Category::MeasurableImpact,
        Category::SectionStructure,
        Category::WordVariety,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::BulletStructure => "Bullet Structure",
            Category::ActionVerbs => "Action Verbs",
            Category::MeasurableImpact => "Measurable Impact",
            Category::SectionStructure => "Section Structure",
            Category::WordVariety => "Word Variety",
        }
    }

    /// Maximum points; the six maxima sum to 100
    pub fn max_score(self) -> u8 {
        match self {
            Category::Length => 15,
            Category::BulletStructure => 20,
            Category::ActionVerbs => 20,
            Category::MeasurableImpact => 20,
            Category::SectionStructure => 15,
            Category::WordVariety => 10,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Length => "Word count appropriateness (300–800 ideal)",
            Category::BulletStructure => "Use of bullet points for readability",
            Category::ActionVerbs => "Strong action verbs to convey impact",
            Category::MeasurableImpact => "Quantified achievements and metrics",
            Category::SectionStructure => "Required sections present and organized",
            Category::WordVariety => "Vocabulary diversity and minimal repetition",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Length => write!(f, "length"),
            Category::BulletStructure => write!(f, "bullet-structure"),
            Category::ActionVerbs => write!(f, "action-verbs"),
            Category::MeasurableImpact => write!(f, "measurable-impact"),
            Category::SectionStructure => write!(f, "section-structure"),
            Category::WordVariety => write!(f, "word-variety"),
        }
    }
}

/// Qualitative label for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
    Poor,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Rating::Excellent,
            70..=79 => Rating::Good,
            50..=69 => Rating::Fair,
            30..=49 => Rating::NeedsWork,
            _ => Rating::Poor,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::NeedsWork => write!(f, "Needs Work"),
            Rating::Poor => write!(f, "Poor"),
        }
    }
}

/// Color band for any 0-100 percentage (total score, history, keyword match rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            70.. => ScoreBand::Strong,
            40..=69 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }
}

/// A scored resume together with where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    /// Source path (`<stdin>` when read from standard input)
    pub path: PathBuf,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// Public API: score resume text. Pure and deterministic; never fails.
pub fn analyze(text: &str) -> AnalysisResult {
    ScoringEngine::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_max_scores_sum_to_100() {
        let sum: u32 = Category::ALL.iter().map(|c| c.max_score() as u32).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn category_max_scores_in_reporting_order() {
        let maxes: Vec<u8> = Category::ALL.iter().map(|c| c.max_score()).collect();
        assert_eq!(maxes, vec![15, 20, 20, 20, 15, 10]);
    }

    #[test]
    fn rating_from_score_boundaries() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(70), Rating::Good);
        assert_eq!(Rating::from_score(69), Rating::Fair);
        assert_eq!(Rating::from_score(50), Rating::Fair);
        assert_eq!(Rating::from_score(49), Rating::NeedsWork);
        assert_eq!(Rating::from_score(30), Rating::NeedsWork);
        assert_eq!(Rating::from_score(29), Rating::Poor);
        assert_eq!(Rating::from_score(0), Rating::Poor);
    }

    #[test]
    fn score_band_boundaries() {
        assert_eq!(ScoreBand::from_percent(70), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_percent(69), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_percent(40), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_percent(39), ScoreBand::Weak);
    }

    #[test]
    fn category_score_uses_static_metadata() {
        let c = CategoryScore::new(Category::WordVariety, 8);
        assert_eq!(c.name, "Word Variety");
        assert_eq!(c.max_score, 10);
        assert_eq!(c.description, "Vocabulary diversity and minimal repetition");
        assert!((c.ratio() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_result_shape() {
        let r = AnalysisResult::empty();
        assert_eq!(r.total_score, 0);
        assert!(r.is_empty());
        assert_eq!(r.suggestions, vec![EMPTY_INPUT_SUGGESTION.to_string()]);
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_string(&analyze("Led a team")).unwrap();
        assert!(json.contains("\"totalScore\""));
        assert!(json.contains("\"maxScore\""));
        assert!(json.contains("\"wordCount\""));
    }
}
