//! Word variety: penalize words repeated more than three times

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Occurrences allowed before a word counts as overused
const MAX_OCCURRENCES: usize = 3;

/// Stop words excluded from the repetition count.
/// Independent of the keyword matcher's list in `crate::keywords`.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "was", "are", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "this", "that", "these",
    "those", "i", "me", "my", "we", "our", "you", "your", "he", "she",
    "it", "they", "them", "its", "his", "her", "their", "as", "from",
    "not", "so", "if", "then", "than", "also", "about", "up", "out",
    "all", "each", "every", "both", "few", "more", "most", "other",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?-u:\b)[a-z]{4,}(?-u:\b)").unwrap())
}

/// Words occurring more than three times, most frequent first.
/// Ties keep the order in which the words first appeared.
pub fn overused_words(text: &str) -> Vec<(String, usize)> {
    let lower = text.to_lowercase();
    let stop = stop_words();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for m in word_pattern().find_iter(&lower) {
        let word = m.as_str();
        if stop.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    let mut overused: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(_, n)| *n > MAX_OCCURRENCES)
        .map(|(w, n)| (w.to_string(), n))
        .collect();
    // stable: ties stay in discovery order
    overused.sort_by(|a, b| b.1.cmp(&a.1));
    overused
}

fn format_top(words: &[(String, usize)]) -> String {
    words
        .iter()
        .take(3)
        .map(|(w, n)| format!("\"{}\" ({}×)", w, n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scorer for vocabulary diversity
pub struct WordVarietyScorer;

impl WordVarietyScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordVarietyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for WordVarietyScorer {
    fn category(&self) -> Category {
        Category::WordVariety
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let overused = overused_words(text);
        log::trace!("word variety: {} overused words", overused.len());

        match overused.len() {
            0 => ScorerOutcome::clean(10),
            1..=2 => {
                let (word, count) = &overused[0];
                ScorerOutcome::with_suggestion(
                    8,
                    format!(
                        "Consider varying your language — \"{}\" appears {} times.",
                        word, count
                    ),
                )
            }
            3..=5 => ScorerOutcome::with_suggestion(
                5,
                format!(
                    "Several words are overused: {}. Use synonyms for variety.",
                    format_top(&overused)
                ),
            ),
            _ => ScorerOutcome::with_suggestion(
                2,
                format!(
                    "Significant word repetition detected. Diversify your vocabulary — {} and more.",
                    format_top(&overused)
                ),
            ),
        }
    }
}
