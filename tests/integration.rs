//! Integration tests for the scoring library's public API.

use resume_score::keywords::check_keywords;
use resume_score::sample::SAMPLE_RESUME;
use resume_score::{analyze, Category, Rating, ScoringEngine, EMPTY_INPUT_SUGGESTION};
use std::fs;
use std::path::Path;

fn fixture(name: &str) -> String {
    fs::read_to_string(Path::new("tests/fixtures").join(name)).unwrap()
}

fn category_score(text: &str, category: Category) -> u8 {
    analyze(text)
        .category(category.name())
        .map(|c| c.score)
        .unwrap()
}

#[test]
fn sample_resume_rates_excellent() {
    let result = analyze(SAMPLE_RESUME);
    assert!(result.total_score >= 80, "got {}", result.total_score);
    assert_eq!(result.rating(), Rating::Excellent);
}

#[test]
fn strong_fixture_breakdown() {
    let result = analyze(&fixture("strong.md"));
    let scores: Vec<u8> = result.categories.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![15, 20, 20, 20, 15, 5]);
    assert_eq!(result.total_score, 95);
    assert_eq!(result.word_count, 323);
    // Only word variety falls short
    assert_eq!(result.suggestions.len(), 1);
}

#[test]
fn weak_fixture_scores_below_strong() {
    let weak = analyze(&fixture("weak.txt"));
    let strong = analyze(&fixture("strong.md"));
    assert!(weak.total_score < strong.total_score);
    assert_eq!(weak.total_score, 34);
    assert_eq!(weak.rating(), Rating::NeedsWork);
}

#[test]
fn single_word_scores_poor() {
    let result = analyze("hi");
    assert!(result.total_score < 30);
    assert_eq!(result.rating(), Rating::Poor);
    assert_eq!(result.word_count, 1);
}

#[test]
fn blank_input_placeholder() {
    for text in ["", "   ", "\n\n\t"] {
        let result = analyze(text);
        assert_eq!(result.total_score, 0);
        assert!(result.categories.is_empty());
        assert_eq!(result.suggestions, vec![EMPTY_INPUT_SUGGESTION.to_string()]);
    }
}

#[test]
fn categories_in_fixed_order_with_fixed_maxima() {
    let result = analyze(SAMPLE_RESUME);
    let names: Vec<&str> = result.categories.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names, expected);

    let maxima: Vec<u8> = result.categories.iter().map(|c| c.max_score).collect();
    assert_eq!(maxima, vec![15, 20, 20, 20, 15, 10]);
}

#[test]
fn total_is_sum_of_categories() {
    for text in [SAMPLE_RESUME, "hi", "Experience\n- Led a team of 12"] {
        let result = analyze(text);
        let sum: u32 = result.categories.iter().map(|c| c.score as u32).sum();
        assert_eq!(result.total_score as u32, sum);
        assert!(result.total_score <= 100);
    }
}

#[test]
fn bullet_markers_are_recognized() {
    assert_eq!(category_score("• Led team", Category::BulletStructure), 20);
    assert_eq!(category_score("- Led team", Category::BulletStructure), 20);
    assert_eq!(category_score("Led team", Category::BulletStructure), 5);
}

#[test]
fn synonymous_sections_count_once() {
    let both = category_score("Experience\nWork Experience", Category::SectionStructure);
    let one = category_score("Experience", Category::SectionStructure);
    assert_eq!(both, one);
}

#[test]
fn adding_verbs_and_sections_never_lowers_those_categories() {
    let base = "I did things at a company for a while.";
    let richer = format!(
        "{}\nSummary\nExperience\nEducation\nSkills\n\
         led built designed launched optimized managed created delivered",
        base
    );
    for category in [Category::ActionVerbs, Category::SectionStructure] {
        assert!(category_score(&richer, category) >= category_score(base, category));
    }
    assert_eq!(category_score(&richer, Category::ActionVerbs), 20);
    assert_eq!(category_score(&richer, Category::SectionStructure), 15);
}

#[test]
fn analysis_is_deterministic() {
    assert_eq!(analyze(SAMPLE_RESUME), analyze(SAMPLE_RESUME));
    let engine = ScoringEngine::new();
    assert_eq!(engine.analyze(SAMPLE_RESUME), analyze(SAMPLE_RESUME));
}

#[test]
fn keyword_check_is_independent_of_score() {
    let resume = fixture("strong.md");
    let before = analyze(&resume);
    let report = check_keywords(&fixture("job.txt"), &resume).unwrap();
    assert_eq!(analyze(&resume), before);

    assert_eq!(report.total, 9);
    assert_eq!(report.matched, 8);
    assert_eq!(report.match_percent, 89);
    assert_eq!(report.missing().collect::<Vec<_>>(), vec!["terraform"]);
    assert!(report.tip.is_none());
}

#[test]
fn documents_scored_from_disk_match_text() {
    let engine = ScoringEngine::new();
    let doc = engine
        .analyze_document(Path::new("tests/fixtures/weak.txt"))
        .unwrap();
    assert_eq!(doc.analysis, analyze(&fixture("weak.txt")));
    assert!(doc.path.ends_with("weak.txt"));
}
