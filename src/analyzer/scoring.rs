//! Score aggregation and labels

use crate::{AnalysisResult, CategoryScore, Rating};

/// Calculator for resume scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Total score: the plain sum of category scores (maxima sum to 100)
    pub fn total(categories: &[CategoryScore]) -> u8 {
        let sum: u32 = categories.iter().map(|c| c.score as u32).sum();
        sum.min(100) as u8
    }

    /// Get a description of the rating
    pub fn rating_description(rating: Rating) -> &'static str {
        match rating {
            Rating::Excellent => "Excellent - Well structured, quantified and concise",
            Rating::Good => "Good - Solid resume with a few gaps to close",
            Rating::Fair => "Fair - Covers the basics but needs strengthening",
            Rating::NeedsWork => "Needs Work - Several categories are well below target",
            Rating::Poor => "Poor - Needs major restructuring",
        }
    }

    /// Categories furthest below their maximum, weakest first.
    /// Ties keep reporting order. Full-score categories are skipped.
    pub fn weakest_categories(result: &AnalysisResult, limit: usize) -> Vec<&CategoryScore> {
        let mut below: Vec<&CategoryScore> = result
            .categories
            .iter()
            .filter(|c| c.score < c.max_score)
            .collect();
        below.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));
        below.truncate(limit);
        below
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn categories(scores: [u8; 6]) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .zip(scores)
            .map(|(c, s)| CategoryScore::new(*c, s))
            .collect()
    }

    #[test]
    fn total_is_sum_of_categories() {
        assert_eq!(ScoreCalculator::total(&categories([15, 20, 20, 20, 15, 10])), 100);
        assert_eq!(ScoreCalculator::total(&categories([3, 5, 4, 4, 3, 10])), 29);
        assert_eq!(ScoreCalculator::total(&[]), 0);
    }

    #[test]
    fn rating_description_all_ratings() {
        assert!(ScoreCalculator::rating_description(Rating::Excellent).contains("Excellent"));
        assert!(ScoreCalculator::rating_description(Rating::Good).contains("Good"));
        assert!(ScoreCalculator::rating_description(Rating::Fair).contains("Fair"));
        assert!(ScoreCalculator::rating_description(Rating::NeedsWork).contains("Needs Work"));
        assert!(ScoreCalculator::rating_description(Rating::Poor).contains("Poor"));
    }

    #[test]
    fn weakest_categories_orders_by_ratio() {
        let result = AnalysisResult {
            total_score: 58,
            categories: categories([15, 5, 10, 20, 3, 5]),
            suggestions: vec![],
            word_count: 400,
        };
        let weakest = ScoreCalculator::weakest_categories(&result, 3);
        let names: Vec<&str> = weakest.iter().map(|c| c.name.as_str()).collect();
        // 3/15 = 0.2, 5/20 = 0.25, then 10/20 and 5/10 tie at 0.5
        assert_eq!(names, vec!["Section Structure", "Bullet Structure", "Action Verbs"]);
    }

    #[test]
    fn weakest_categories_skips_full_marks() {
        let result = AnalysisResult {
            total_score: 100,
            categories: categories([15, 20, 20, 20, 15, 10]),
            suggestions: vec![],
            word_count: 400,
        };
        assert!(ScoreCalculator::weakest_categories(&result, 3).is_empty());
    }
}
