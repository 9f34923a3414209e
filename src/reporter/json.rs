//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::history::HistoryFile;
use crate::keywords::KeywordReport;
use crate::{Rating, ScoredDocument};
use serde::Serialize;
use std::path::Path;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single scored resume as JSON, with its keyword report when one was requested
    pub fn report(&self, doc: &ScoredDocument, keywords: Option<&KeywordReport>) -> String {
        self.render(&JsonDocument::new(doc, keywords), "{}")
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, docs: &[ScoredDocument]) -> String {
        let out: Vec<JsonDocument> = docs.iter().map(|d| JsonDocument::new(d, None)).collect();
        self.render(&out, "[]")
    }

    /// Report with summary
    pub fn report_with_summary(&self, docs: &[ScoredDocument], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: docs.iter().map(|d| JsonDocument::new(d, None)).collect(),
            summary: JsonSummary {
                documents_analyzed: stats.documents_analyzed,
                average_score: stats.average_score,
                average_rating: stats.average_rating,
                best: stats.best.as_deref(),
                total_words: stats.total_words,
                total_suggestions: stats.total_suggestions,
            },
        };
        self.render(&output, "{}")
    }

    /// Report recorded history, newest first
    pub fn report_history(&self, history: &HistoryFile) -> String {
        self.render(&history.entries, "[]")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    #[serde(flatten)]
    doc: &'a ScoredDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<&'a KeywordReport>,
}

impl<'a> JsonDocument<'a> {
    fn new(doc: &'a ScoredDocument, keywords: Option<&'a KeywordReport>) -> Self {
        Self {
            doc,
            rating: (!doc.analysis.is_empty()).then(|| doc.analysis.rating()),
            keywords,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<JsonDocument<'a>>,
    summary: JsonSummary<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary<'a> {
    documents_analyzed: usize,
    average_score: u8,
    average_rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<&'a Path>,
    total_words: usize,
    total_suggestions: usize,
}
