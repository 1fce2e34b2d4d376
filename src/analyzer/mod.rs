//! Analyzer module - transcript scoring engine

pub mod criteria;
pub mod engine;

pub use criteria::CriterionAnalyzer;
pub use engine::ScoringEngine;
