//! Flow scoring - section ordering check

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};

/// A named introduction section with its trigger keywords
#[derive(Debug, Clone)]
pub struct Section {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Checks that the canonical introduction sections appear in order.
///
/// For each section, the offset of the first keyword (in declaration order)
/// found anywhere in the lowercased transcript is compared against the
/// previous matched offset; a regression flags the ordering. Sections with no
/// match are skipped without moving the running offset.
pub struct FlowAnalyzer {
    sections: Vec<Section>,
}

impl FlowAnalyzer {
    pub fn new() -> Self {
        Self {
            sections: vec![
                Section {
                    name: "Salutation",
                    keywords: &["hello", "hi", "good morning", "good afternoon", "good evening"],
                },
                Section {
                    name: "Basic Details",
                    keywords: &["name", "myself", "age", "class", "school"],
                },
                Section {
                    name: "Additional Details",
                    keywords: &["family", "hobby", "enjoy", "like", "fun fact"],
                },
                Section {
                    name: "Closing",
                    keywords: &["thank you", "thanks", "that's all"],
                },
            ],
        }
    }

    /// Replace the section table (for tests with substitute tables)
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    fn suggested_order(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(" \u{2192} ")
    }
}

impl Default for FlowAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for FlowAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Flow
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let text = &ctx.lower;
        let mut last_match: Option<usize> = None;
        let mut order_followed = true;

        for section in &self.sections {
            // First keyword in declaration order that occurs anywhere wins,
            // not the keyword with the smallest offset.
            let position = section
                .keywords
                .iter()
                .find_map(|kw| text.find(kw));
            if let Some(position) = position {
                if last_match.is_some_and(|prev| position < prev) {
                    order_followed = false;
                }
                last_match = Some(position);
            }
        }

        let (score, line) = if order_followed {
            (10.0, "Introduction follows logical order.".to_string())
        } else {
            (
                5.0,
                format!(
                    "Introduction structure could be improved. Suggested order: {}",
                    self.suggested_order()
                ),
            )
        };

        CriterionResult {
            score,
            max_score: self.max_score(),
            feedback: vec![line],
            details: CriterionDetails::Flow { order_followed },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str) -> CriterionResult {
        let ctx = TranscriptContext::new(text, None);
        FlowAnalyzer::new().evaluate(&ctx)
    }

    #[test]
    fn canonical_order_scores_full_marks() {
        let result = evaluate(
            "Hello everyone. My name is Ada and I am in class five. \
             My family is small and my hobby is chess. Thank you.",
        );
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.details,
            CriterionDetails::Flow {
                order_followed: true
            }
        );
    }

    #[test]
    fn closing_before_greeting_halves_the_score() {
        // "thank you" sits before "hello", so the Closing section matches at
        // a smaller offset than the Salutation section.
        let result = evaluate("Thank you. Hello. My name is X.");
        assert_eq!(result.score, 5.0);
        assert_eq!(
            result.details,
            CriterionDetails::Flow {
                order_followed: false
            }
        );
        assert!(result.feedback[0].contains("Suggested order"));
    }

    #[test]
    fn unmatched_sections_are_skipped() {
        // No closing keywords at all; the remaining sections are in order.
        let result = evaluate("Hello. My name is Ada. My family is great.");
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn empty_transcript_counts_as_ordered() {
        let result = evaluate("");
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.details,
            CriterionDetails::Flow {
                order_followed: true
            }
        );
    }
}
