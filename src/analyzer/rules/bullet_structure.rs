//! Bullet structure: share of non-blank lines that are list items

use super::{CategoryScorer, ScorerOutcome};
use crate::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Leading glyph (•, ‣, ◦, ⁃, ▪, ●, -, *) or ordinal ("1.", "2)", "a.") followed by whitespace
fn bullet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?:[\u{2022}\u{2023}\u{25E6}\u{2043}\u{25AA}\u{25CF}\-*]|[0-9]+[.)]|[A-Za-z][.)])\s")
            .unwrap()
    })
}

/// True if the line starts with a recognized list marker
pub fn is_bullet_line(line: &str) -> bool {
    bullet_pattern().is_match(line)
}

/// Scorer for bullet-point usage
pub struct BulletStructureScorer;

impl BulletStructureScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BulletStructureScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for BulletStructureScorer {
    fn category(&self) -> Category {
        Category::BulletStructure
    }

    fn score(&self, text: &str) -> ScorerOutcome {
        let lines: Vec<&str> = text
            .split('\n')
            .filter(|l| !l.trim().is_empty())
            .collect();
        if lines.is_empty() {
            return ScorerOutcome::with_suggestion(
                0,
                "Add bullet points to structure your experience.",
            );
        }

        let bullets = lines.iter().filter(|l| is_bullet_line(l)).count();
        let ratio = bullets as f64 / lines.len() as f64;

        if ratio >= 0.4 {
            ScorerOutcome::clean(20)
        } else if ratio >= 0.25 {
            ScorerOutcome::with_suggestion(
                15,
                "Good use of bullets. Adding a few more could improve readability.",
            )
        } else if ratio >= 0.1 {
            ScorerOutcome::with_suggestion(
                10,
                "Use more bullet points to make your experience easier to scan.",
            )
        } else {
            ScorerOutcome::with_suggestion(
                5,
                "Your resume lacks bullet points. Structure your achievements as bullet lists.",
            )
        }
    }
}
