//! Scoring engine - runs every category scorer and aggregates the result

use crate::ingest::{self, IngestError};
use crate::{AnalysisResult, CategoryScore, Rating, ScoredDocument};
use log::debug;
use std::path::{Path, PathBuf};

use super::rules::{
    ActionVerbScorer, BulletStructureScorer, CategoryScorer, LengthScorer,
    MeasurableImpactScorer, SectionStructureScorer, WordVarietyScorer,
};
use super::rules::length::count_words;
use super::ScoreCalculator;

/// Batches larger than this are scored in parallel
pub const PARALLEL_THRESHOLD: usize = 10;

/// Main scoring engine. Holds no state between calls; safe to share across threads.
pub struct ScoringEngine {
    /// Scorers in reporting order
    scorers: Vec<Box<dyn CategoryScorer>>,
}

impl ScoringEngine {
    /// Create an engine with the six standard scorers
    pub fn new() -> Self {
        Self {
            scorers: vec![
                Box::new(LengthScorer::new()),
                Box::new(BulletStructureScorer::new()),
                Box::new(ActionVerbScorer::new()),
                Box::new(MeasurableImpactScorer::new()),
                Box::new(SectionStructureScorer::new()),
                Box::new(WordVarietyScorer::new()),
            ],
        }
    }

    /// Score resume text.
    ///
    /// Blank input short-circuits to a zero score with no categories and a
    /// single placeholder suggestion.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty()
        {
            debug!("blank input, skipping scorers");
            return AnalysisResult::empty();
        }
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut categories = Vec::with_capacity(self.scorers.len());
        let mut suggestions = Vec::new();

        for scorer in &self.scorers {
            let category = scorer.category();
            let outcome = scorer.score(text);
            debug!(
                "{}: {}/{}{}",
                category,
                outcome.score,
                category.max_score(),
                if outcome.suggestion.is_some() { " (suggestion)" } else { "" }
            );
            categories.push(CategoryScore::new(category, outcome.score));
            if let Some(suggestion) = outcome.suggestion {
                suggestions.push(suggestion);
            }
        }

        let total_score = ScoreCalculator::total(&categories);

        AnalysisResult {
            total_score,
            categories,
            suggestions,
            word_count: count_words(text),
        }
    }

    /// Load a resume document (text, Markdown or PDF) and score it
    pub fn analyze_document(&self, path: &Path) -> Result<ScoredDocument, IngestError> {
        let text = ingest::load_document(path)?;
        Ok(ScoredDocument {
            path: path.to_path_buf(),
            analysis: self.analyze(&text),
        })
    }

    /// Score multiple documents sequentially
    pub fn analyze_many(&self, paths: &[PathBuf]) -> Vec<Result<ScoredDocument, IngestError>> {
        paths.iter().map(|p| self.analyze_document(p)).collect()
    }

    /// Score multiple documents in parallel using rayon
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
    ) -> Vec<Result<ScoredDocument, IngestError>> {
        use rayon::prelude::*;

        paths.par_iter().map(|p| self.analyze_document(p)).collect()
    }

    /// Score documents, going parallel when asked or when the batch is large
    pub fn analyze_documents(
        &self,
        paths: &[PathBuf],
        parallel: bool,
    ) -> Vec<Result<ScoredDocument, IngestError>> {
        if parallel || paths.len() > PARALLEL_THRESHOLD {
            debug!("scoring {} documents in parallel", paths.len());
            self.analyze_parallel(paths)
        } else {
            self.analyze_many(paths)
        }
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(documents: &[ScoredDocument]) -> AggregateStats {
        if documents.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = documents
            .iter()
            .map(|d| d.analysis.total_score as u32)
            .sum();
        let average_score = (total_score / documents.len() as u32) as u8;

        let best = documents
            .iter()
            .max_by_key(|d| d.analysis.total_score)
            .map(|d| d.path.clone());

        AggregateStats {
            documents_analyzed: documents.len(),
            average_score,
            average_rating: Rating::from_score(average_score),
            total_words: documents.iter().map(|d| d.analysis.word_count).sum(),
            total_suggestions: documents.iter().map(|d| d.analysis.suggestions.len()).sum(),
            best,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple document analyses
#[derive(Debug)]
pub struct AggregateStats {
    /// Number of documents scored
    pub documents_analyzed: usize,
    /// Average total score (rounded down)
    pub average_score: u8,
    pub average_rating: Rating,
    /// Total words across all documents
    pub total_words: usize,
    /// Total suggestions across all documents
    pub total_suggestions: usize,
    /// Highest-scoring document
    pub best: Option<PathBuf>,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            documents_analyzed: 0,
            average_score: 0,
            average_rating: Rating::Poor,
            total_words: 0,
            total_suggestions: 0,
            best: None,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::Category;
    use proptest::prelude::*;

    /// Strategy that generates strings made of resume-ish fragments.
    fn arbitrary_resume_content() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "Experience",
                "Work Experience",
                "Education",
                "Skills:",
                "Summary",
                "• ",
                "- ",
                "1. ",
                "a) ",
                "Led ",
                "developed ",
                "optimized ",
                "increased by 40%",
                "$1,200,000",
                "3 million",
                "25 users",
                "2019",
                "team ",
                "\n",
                "\n\n\n",
                " ",
                "\t",
                "naïve café ",
                "日本語 ",
            ]),
            0..80,
        )
        .prop_map(|parts| parts.join(""))
    }

    fn check_invariants(result: &AnalysisResult) -> Result<(), TestCaseError> {
        prop_assert!(result.total_score <= 100);
        if result.is_empty() {
            prop_assert_eq!(result.total_score, 0);
            return Ok(());
        }
        prop_assert_eq!(result.categories.len(), 6);
        let sum: u32 = result.categories.iter().map(|c| c.score as u32).sum();
        prop_assert_eq!(result.total_score as u32, sum);
        for (score, category) in result.categories.iter().zip(Category::ALL) {
            prop_assert!(score.score <= score.max_score);
            prop_assert_eq!(score.max_score, category.max_score());
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn engine_is_total_on_arbitrary_input(ref input in "(?s).{0,2000}") {
            let result = ScoringEngine::new().analyze(input);
            check_invariants(&result)?;
        }

        #[test]
        fn engine_is_total_on_resume_like_input(ref input in arbitrary_resume_content()) {
            let result = ScoringEngine::new().analyze(input);
            check_invariants(&result)?;
        }

        #[test]
        fn analyze_is_idempotent(ref input in arbitrary_resume_content()) {
            let engine = ScoringEngine::new();
            prop_assert_eq!(engine.analyze(input), engine.analyze(input));
        }

        #[test]
        fn blank_input_always_short_circuits(ref input in "[ \t\r\n]{0,50}") {
            let result = ScoringEngine::new().analyze(input);
            prop_assert!(result.is_empty());
            prop_assert_eq!(result.suggestions.len(), 1);
        }
    }
}
