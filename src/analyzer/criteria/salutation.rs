//! Salutation scoring - greeting tier detection

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult, SalutationTier};

/// Scores the opening greeting against three phrase tiers.
///
/// Tiers are checked in order and the first matching tier wins. Matching is
/// case-insensitive substring search over the whole transcript.
pub struct SalutationAnalyzer {
    excellent_phrases: Vec<&'static str>,
    good_phrases: Vec<&'static str>,
    normal_phrases: Vec<&'static str>,
}

impl SalutationAnalyzer {
    pub fn new() -> Self {
        Self {
            excellent_phrases: vec!["i am excited", "feeling great", "excited to introduce"],
            good_phrases: vec![
                "good morning",
                "good afternoon",
                "good evening",
                "good day",
                "hello everyone",
            ],
            normal_phrases: vec!["hi", "hello"],
        }
    }

    /// Replace the phrase tiers (for tests with substitute tables)
    pub fn with_tiers(
        mut self,
        excellent: Vec<&'static str>,
        good: Vec<&'static str>,
        normal: Vec<&'static str>,
    ) -> Self {
        self.excellent_phrases = excellent;
        self.good_phrases = good;
        self.normal_phrases = normal;
        self
    }

    fn tier_for(&self, text: &str) -> SalutationTier {
        if self.excellent_phrases.iter().any(|p| text.contains(p)) {
            SalutationTier::Excellent
        } else if self.good_phrases.iter().any(|p| text.contains(p)) {
            SalutationTier::Good
        } else if self.normal_phrases.iter().any(|p| text.contains(p)) {
            SalutationTier::Normal
        } else {
            SalutationTier::None
        }
    }
}

impl Default for SalutationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for SalutationAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Salutation
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let tier = self.tier_for(&ctx.lower);

        let (score, line) = match tier {
            SalutationTier::Excellent => {
                (5.0, "Excellent salutation with enthusiasm detected!")
            }
            SalutationTier::Good => (4.0, "Good formal salutation found."),
            SalutationTier::Normal => (2.0, "Basic salutation present."),
            SalutationTier::None => (
                0.0,
                "No clear salutation found. Consider starting with a greeting.",
            ),
        };

        CriterionResult {
            score,
            max_score: self.max_score(),
            feedback: vec![line.to_string()],
            details: CriterionDetails::Salutation { tier },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str) -> CriterionResult {
        let ctx = TranscriptContext::new(text, None);
        SalutationAnalyzer::new().evaluate(&ctx)
    }

    #[test]
    fn excited_opener_reaches_excellent_tier() {
        let result = evaluate("I am excited to introduce myself");
        assert_eq!(result.score, 5.0);
        assert_eq!(
            result.details,
            CriterionDetails::Salutation {
                tier: SalutationTier::Excellent
            }
        );
    }

    #[test]
    fn formal_greeting_is_good_tier() {
        let result = evaluate("Good morning everyone, my name is Ada.");
        assert_eq!(result.score, 4.0);
        assert_eq!(
            result.details,
            CriterionDetails::Salutation {
                tier: SalutationTier::Good
            }
        );
    }

    #[test]
    fn bare_hi_is_normal_tier() {
        let result = evaluate("Hi, my name is Ada.");
        assert_eq!(result.score, 2.0);
        assert_eq!(
            result.details,
            CriterionDetails::Salutation {
                tier: SalutationTier::Normal
            }
        );
    }

    #[test]
    fn no_greeting_scores_zero() {
        let result = evaluate("My name is Ada and I study mathematics.");
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.details,
            CriterionDetails::Salutation {
                tier: SalutationTier::None
            }
        );
        assert_eq!(result.feedback.len(), 1);
    }

    #[test]
    fn substring_matching_is_intentional() {
        // "hi" inside "this" matches the normal tier; substring search over
        // the whole transcript is the documented behavior.
        let result = evaluate("This is me.");
        assert_eq!(result.score, 2.0);
    }

    #[test]
    fn excellent_tier_wins_over_lower_tiers() {
        let result = evaluate("Hello everyone, I am excited to be here.");
        assert_eq!(result.score, 5.0);
    }
}
