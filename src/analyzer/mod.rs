//! Analyzer module - resume scoring engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::ScoringEngine;
pub use scoring::ScoreCalculator;
