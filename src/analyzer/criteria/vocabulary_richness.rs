//! Vocabulary richness scoring - type-token ratio buckets

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};
use std::collections::HashSet;

/// Scores lexical diversity via the type-token ratio of the cleaned word
/// tokens (non-alphanumeric characters stripped, empty tokens dropped).
pub struct VocabularyRichnessAnalyzer;

impl VocabularyRichnessAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn clean_words(words: &[String]) -> Vec<String> {
        words
            .iter()
            .map(|w| {
                w.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
            })
            .filter(|w| !w.is_empty())
            .collect()
    }
}

impl Default for VocabularyRichnessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for VocabularyRichnessAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::VocabularyRichness
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let max_score = self.max_score();
        let clean_words = Self::clean_words(&ctx.words);

        // Punctuation-only input leaves no scorable tokens, which would make
        // the ratio 0/0; fall back to the neutral midpoint.
        if clean_words.is_empty() {
            return CriterionResult {
                score: max_score / 2.0,
                max_score,
                feedback: vec![
                    "Transcript contains no scorable words; vocabulary diversity could not be assessed."
                        .to_string(),
                ],
                details: CriterionDetails::VocabularyRichness {
                    ttr: 0.0,
                    unique_words: 0,
                    total_words: 0,
                },
            };
        }

        let unique: HashSet<&String> = clean_words.iter().collect();
        let ttr = unique.len() as f64 / clean_words.len() as f64;

        let (score, line) = if ttr >= 0.9 {
            (15.0, format!("Excellent vocabulary diversity (TTR: {ttr:.2})"))
        } else if ttr >= 0.7 {
            (12.0, format!("Good vocabulary range (TTR: {ttr:.2})"))
        } else if ttr >= 0.5 {
            (9.0, format!("Moderate vocabulary diversity (TTR: {ttr:.2})"))
        } else if ttr >= 0.3 {
            (
                6.0,
                format!("Limited vocabulary range (TTR: {ttr:.2}). Try using more varied words."),
            )
        } else {
            (
                3.0,
                format!(
                    "Very repetitive vocabulary (TTR: {ttr:.2}). Work on expanding word choices."
                ),
            )
        };

        CriterionResult {
            score,
            max_score,
            feedback: vec![line],
            details: CriterionDetails::VocabularyRichness {
                ttr: crate::round2(ttr),
                unique_words: unique.len(),
                total_words: clean_words.len(),
            },
        }
    }
}
