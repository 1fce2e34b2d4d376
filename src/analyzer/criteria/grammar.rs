//! Grammar scoring - common error pattern counting

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};
use regex::Regex;

/// A grammar error pattern with a human label for the mistake class.
/// The label is kept for future per-error feedback; only the match count
/// feeds the score today.
struct ErrorPattern {
    pattern: Regex,
    #[allow(dead_code)]
    label: &'static str,
}

/// Scores grammar by counting matches of known error patterns and converting
/// the per-100-words error density into a 0-10 score.
pub struct GrammarAnalyzer {
    patterns: Vec<ErrorPattern>,
}

impl GrammarAnalyzer {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                ErrorPattern {
                    pattern: Regex::new(r"(?i)\bi is\b").unwrap(),
                    label: "subject-verb agreement",
                },
                ErrorPattern {
                    pattern: Regex::new(r"(?i)\bthey is\b").unwrap(),
                    label: "subject-verb agreement",
                },
                ErrorPattern {
                    pattern: Regex::new(r"(?i)\bdon't has\b").unwrap(),
                    label: "auxiliary verb usage",
                },
                ErrorPattern {
                    pattern: Regex::new(r"(?i)\bgoed\b").unwrap(),
                    label: "past tense",
                },
                ErrorPattern {
                    pattern: Regex::new(r"(?i)\bmore better\b").unwrap(),
                    label: "double comparative",
                },
            ],
        }
    }
}

impl Default for GrammarAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for GrammarAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Grammar
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let max_score = self.max_score();
        let total_words = ctx.raw.split_whitespace().count();

        // A transcript with no whitespace-delimited words has no defined
        // error density; fall back to the neutral midpoint instead of
        // dividing by zero.
        if total_words == 0 {
            return CriterionResult {
                score: max_score / 2.0,
                max_score,
                feedback: vec![
                    "Transcript contains no words; grammar could not be assessed.".to_string(),
                ],
                details: CriterionDetails::Grammar {
                    error_count: 0,
                    errors_per100: 0.0,
                },
            };
        }

        let error_count: usize = self
            .patterns
            .iter()
            .map(|p| p.pattern.find_iter(ctx.raw).count())
            .sum();

        let errors_per100 = error_count as f64 / total_words as f64 * 100.0;
        let grammar_score = 1.0 - (errors_per100 / 10.0).min(1.0);
        let score = (grammar_score * max_score).round();

        let line = if score >= 9.0 {
            "Excellent grammar with minimal errors.".to_string()
        } else if score >= 7.0 {
            format!("Good grammar. {error_count} potential issue(s) detected.")
        } else if score >= 5.0 {
            format!("Fair grammar. {error_count} errors found. Review sentence structure.")
        } else {
            format!(
                "Multiple grammar issues detected ({error_count}). \
                 Consider reviewing basic grammar rules."
            )
        };

        CriterionResult {
            score,
            max_score,
            feedback: vec![line],
            details: CriterionDetails::Grammar {
                error_count,
                errors_per100: crate::round1(errors_per100),
            },
        }
    }
}
