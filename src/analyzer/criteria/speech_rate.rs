//! Speech rate scoring - words per minute buckets

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};

/// Scores the spoken pace in words per minute.
///
/// Without a duration the analyzer returns the neutral midpoint rather than
/// penalizing the speaker.
pub struct SpeechRateAnalyzer;

impl SpeechRateAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpeechRateAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for SpeechRateAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::SpeechRate
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let max_score = self.max_score();

        let duration = match ctx.duration_secs {
            Some(secs) if secs > 0.0 => secs,
            _ => {
                return CriterionResult {
                    score: max_score / 2.0,
                    max_score,
                    feedback: vec![
                        "Duration not provided. Speech rate could not be calculated.".to_string(),
                    ],
                    details: CriterionDetails::SpeechRate { wpm: None },
                };
            }
        };

        let wpm = (ctx.word_count() as f64 / duration * 60.0).round() as u32;

        let (score, line) = match wpm {
            111..=140 => (10.0, format!("Ideal speech rate: {wpm} WPM")),
            141..=160 => (
                8.0,
                format!("Slightly fast speech rate: {wpm} WPM. Try to slow down a bit."),
            ),
            81..=110 => (
                6.0,
                format!("Slightly slow speech rate: {wpm} WPM. Try to speak a bit faster."),
            ),
            161.. => (4.0, format!("Too fast: {wpm} WPM. Slow down to improve clarity.")),
            _ => (2.0, format!("Too slow: {wpm} WPM. Try to increase your pace.")),
        };

        CriterionResult {
            score,
            max_score,
            feedback: vec![line],
            details: CriterionDetails::SpeechRate { wpm: Some(wpm) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(words: usize, duration: Option<f64>) -> CriterionResult {
        let text = vec!["word"; words].join(" ");
        let ctx = TranscriptContext::new(&text, duration);
        SpeechRateAnalyzer::new().evaluate(&ctx)
    }

    #[test]
    fn missing_duration_returns_neutral_midpoint() {
        let result = evaluate(52, None);
        assert_eq!(result.score, 5.0);
        assert_eq!(result.details, CriterionDetails::SpeechRate { wpm: None });
        assert!(result.feedback[0].contains("Duration not provided"));
    }

    #[test]
    fn zero_duration_is_treated_as_missing() {
        let result = evaluate(52, Some(0.0));
        assert_eq!(result.score, 5.0);
        assert_eq!(result.details, CriterionDetails::SpeechRate { wpm: None });
    }

    #[test]
    fn ideal_rate_scores_full_marks() {
        // 52 words in 26 seconds = 120 WPM
        let result = evaluate(52, Some(26.0));
        assert_eq!(result.score, 10.0);
        assert_eq!(
            result.details,
            CriterionDetails::SpeechRate { wpm: Some(120) }
        );
    }

    #[test]
    fn bucket_boundaries() {
        // 150 WPM: slightly fast
        assert_eq!(evaluate(150, Some(60.0)).score, 8.0);
        // 100 WPM: slightly slow
        assert_eq!(evaluate(100, Some(60.0)).score, 6.0);
        // 200 WPM: too fast
        assert_eq!(evaluate(200, Some(60.0)).score, 4.0);
        // 60 WPM: too slow
        assert_eq!(evaluate(60, Some(60.0)).score, 2.0);
        // boundary between slow and ideal
        assert_eq!(evaluate(110, Some(60.0)).score, 6.0);
        assert_eq!(evaluate(111, Some(60.0)).score, 10.0);
    }

    #[test]
    fn wpm_is_rounded_to_nearest_integer() {
        // 50 words in 23 seconds = 130.43 WPM -> 130
        let result = evaluate(50, Some(23.0));
        assert_eq!(
            result.details,
            CriterionDetails::SpeechRate { wpm: Some(130) }
        );
    }
}
