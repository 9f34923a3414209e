//! ATS keyword matching against a job description
//!
//! Auxiliary to scoring: the report never feeds into `total_score`.

use crate::ScoreBand;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Keywords kept from a job description
pub const MAX_KEYWORDS: usize = 20;

/// Minimum occurrences in the job description for a term to count
pub const MIN_OCCURRENCES: usize = 2;

/// Match rate below which the report carries a tip
pub const TIP_THRESHOLD: u8 = 70;

pub const LOW_MATCH_TIP: &str = "Try incorporating the missing keywords naturally into your resume to improve your ATS match rate.";

/// Stop words dropped from job descriptions. Kept separate from the
/// word-variety list; it also drops job-posting boilerplate.
pub const KEYWORD_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "was", "are", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "this", "that", "these",
    "those", "i", "me", "my", "we", "our", "you", "your", "he", "she",
    "it", "they", "them", "its", "his", "her", "their", "as", "from",
    "not", "so", "if", "then", "than", "also", "about", "up", "out",
    "all", "each", "every", "both", "few", "more", "most", "other",
    "who", "which", "what", "when", "where", "how", "why", "able",
    "must", "such", "like", "well", "just", "only", "into", "over",
    "new", "one", "two", "work", "working", "looking", "join", "team",
    "role", "position", "company", "including", "etc", "strong",
    "experience", "required", "preferred", "plus", "years", "year",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| KEYWORD_STOP_WORDS.iter().copied().collect())
}

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?-u:\b)[a-z]{3,}(?-u:\b)").unwrap())
}

/// A job-description keyword and whether the resume mentions it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
}

/// Outcome of matching a resume against a job description
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub keywords: Vec<KeywordMatch>,
    pub matched: usize,
    pub total: usize,
    /// Rounded percentage of keywords found (0 when there are none)
    pub match_percent: u8,
    pub band: ScoreBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl KeywordReport {
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .filter(|k| !k.found)
            .map(|k| k.keyword.as_str())
    }
}

/// Frequent non-stop-word terms of a job description, most frequent first.
/// Ties keep the order in which terms first appeared.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let lower = job_description.to_lowercase();
    let stop = stop_words();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for m in term_pattern().find_iter(&lower) {
        let term = m.as_str();
        if stop.contains(term) {
            continue;
        }
        match index.get(term) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(term, counts.len());
                counts.push((term, 1));
            }
        }
    }

    counts.retain(|(_, n)| *n >= MIN_OCCURRENCES);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(t, _)| t.to_string())
        .collect()
}

/// Check which job-description keywords appear in the resume.
///
/// Returns `None` when either text is blank. A keyword is found when it is a
/// case-insensitive substring of the resume, so "java" matches "javascript".
pub fn check_keywords(job_description: &str, resume: &str) -> Option<KeywordReport> {
    if job_description.trim().is_empty() || resume.trim().is_empty() {
        return None;
    }

    let resume_lower = resume.to_lowercase();
    let keywords: Vec<KeywordMatch> = extract_keywords(job_description)
        .into_iter()
        .map(|keyword| KeywordMatch {
            found: resume_lower.contains(&keyword),
            keyword,
        })
        .collect();

    let matched = keywords.iter().filter(|k| k.found).count();
    let total = keywords.len();
    let match_percent = if total > 0 {
        (matched as f64 / total as f64 * 100.0).round() as u8
    } else {
        0
    };
    log::debug!("keyword match: {}/{} ({}%)", matched, total, match_percent);

    Some(KeywordReport {
        keywords,
        matched,
        total,
        match_percent,
        band: ScoreBand::from_percent(match_percent),
        tip: (match_percent < TIP_THRESHOLD).then(|| LOW_MATCH_TIP.to_string()),
    })
}
