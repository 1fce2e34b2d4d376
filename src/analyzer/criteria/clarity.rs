//! Clarity scoring - filler word density

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};
use regex::Regex;

const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah",
];

/// Scores clarity by counting whole-word (or whole-phrase) filler occurrences
/// in the joined word tokens and bucketing the filler rate.
pub struct ClarityAnalyzer {
    fillers: Vec<Regex>,
}

impl ClarityAnalyzer {
    pub fn new() -> Self {
        Self::with_fillers(FILLER_WORDS)
    }

    /// Build with a substitute filler list (for tests)
    pub fn with_fillers(fillers: &[&str]) -> Self {
        Self {
            fillers: fillers
                .iter()
                .map(|f| Regex::new(&format!(r"(?i)\b{f}\b")).unwrap())
                .collect(),
        }
    }
}

impl Default for ClarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for ClarityAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Clarity
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let max_score = self.max_score();
        let total_words = ctx.word_count();

        // No words means no defined filler rate; use the neutral midpoint.
        if total_words == 0 {
            return CriterionResult {
                score: max_score / 2.0,
                max_score,
                feedback: vec![
                    "Transcript contains no words; clarity could not be assessed.".to_string(),
                ],
                details: CriterionDetails::Clarity {
                    filler_count: 0,
                    filler_rate: 0.0,
                },
            };
        }

        let text = ctx.words.join(" ");
        let filler_count: usize = self
            .fillers
            .iter()
            .map(|re| re.find_iter(&text).count())
            .sum();

        let filler_rate = filler_count as f64 / total_words as f64 * 100.0;

        let (score, line) = if filler_rate < 0.3 {
            (
                15.0,
                format!("Excellent clarity with minimal filler words ({filler_rate:.1}%)"),
            )
        } else if filler_rate < 0.5 {
            (12.0, format!("Good clarity ({filler_rate:.1}% filler words)"))
        } else if filler_rate < 0.7 {
            (
                9.0,
                format!("Moderate use of filler words ({filler_rate:.1}%). Try to reduce them."),
            )
        } else if filler_rate < 0.9 {
            (
                6.0,
                format!(
                    "Frequent filler words ({filler_rate:.1}%). \
                     Practice speaking more deliberately."
                ),
            )
        } else {
            (
                3.0,
                format!(
                    "Excessive filler words ({filler_rate:.1}%). \
                     Focus on pausing instead of using fillers."
                ),
            )
        };

        let mut feedback = vec![line];
        if filler_count > 0 {
            feedback.push(format!(
                "Found {filler_count} filler word(s) in {total_words} total words."
            ));
        }

        CriterionResult {
            score,
            max_score,
            feedback,
            details: CriterionDetails::Clarity {
                filler_count,
                filler_rate: crate::round1(filler_rate),
            },
        }
    }
}
