//! Engagement scoring - sentiment word balance

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};
use regex::Regex;

const POSITIVE_WORDS: &[&str] = &[
    "excited",
    "happy",
    "great",
    "wonderful",
    "amazing",
    "love",
    "enjoy",
    "favorite",
    "fun",
    "interesting",
    "thank",
    "grateful",
    "proud",
];

const NEGATIVE_WORDS: &[&str] = &[
    "boring",
    "hate",
    "terrible",
    "awful",
    "bad",
    "dislike",
    "unfortunately",
];

/// Neutral sentiment used when the transcript contains no sentiment words
const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Scores engagement from the balance of positive and negative sentiment
/// words. Words are prefix-matched with a leading word boundary, so
/// "excitedly" also counts as "excited".
pub struct EngagementAnalyzer {
    positive: Vec<Regex>,
    negative: Vec<Regex>,
}

impl EngagementAnalyzer {
    pub fn new() -> Self {
        Self::with_word_lists(POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    /// Build with substitute sentiment word lists (for tests)
    pub fn with_word_lists(positive: &[&str], negative: &[&str]) -> Self {
        let compile = |words: &[&str]| {
            words
                .iter()
                .map(|w| Regex::new(&format!(r"(?i)\b{w}")).unwrap())
                .collect()
        };
        Self {
            positive: compile(positive),
            negative: compile(negative),
        }
    }

    fn count_matches(patterns: &[Regex], text: &str) -> usize {
        patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

impl Default for EngagementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for EngagementAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::Engagement
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let positive_words = Self::count_matches(&self.positive, &ctx.lower);
        let negative_words = Self::count_matches(&self.negative, &ctx.lower);

        let total = positive_words + negative_words;
        let sentiment_score = if total > 0 {
            positive_words as f64 / total as f64
        } else {
            NEUTRAL_SENTIMENT
        };

        let (score, line) = if sentiment_score >= 0.9 {
            (15.0, "Highly positive and engaging tone!")
        } else if sentiment_score >= 0.7 {
            (12.0, "Positive and enthusiastic delivery.")
        } else if sentiment_score >= 0.5 {
            (9.0, "Neutral tone. Consider adding more enthusiasm.")
        } else if sentiment_score >= 0.3 {
            (6.0, "Somewhat negative tone. Try to be more positive.")
        } else {
            (3.0, "Negative tone detected. Focus on positive language.")
        };

        CriterionResult {
            score,
            max_score: self.max_score(),
            feedback: vec![line.to_string()],
            details: CriterionDetails::Engagement {
                sentiment_score: crate::round2(sentiment_score),
                positive_words,
                negative_words,
            },
        }
    }
}
