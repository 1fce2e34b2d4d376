//! Scoring engine - orchestrates all criterion analyzers

use crate::tokenizer::TranscriptContext;
use crate::{round2, CriterionFeedback, CriterionScores, ScoringResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::criteria::{
    ClarityAnalyzer, ContentStructureAnalyzer, CriterionAnalyzer, EngagementAnalyzer,
    FlowAnalyzer, GrammarAnalyzer, SalutationAnalyzer, SpeechRateAnalyzer,
    VocabularyRichnessAnalyzer,
};

/// Main scoring engine that runs all eight criterion analyzers over a
/// transcript. Holds the analyzers (and their keyword tables) so repeated
/// scoring calls reuse the compiled patterns.
pub struct ScoringEngine {
    salutation: SalutationAnalyzer,
    content_structure: ContentStructureAnalyzer,
    flow: FlowAnalyzer,
    speech_rate: SpeechRateAnalyzer,
    grammar: GrammarAnalyzer,
    vocabulary_richness: VocabularyRichnessAnalyzer,
    clarity: ClarityAnalyzer,
    engagement: EngagementAnalyzer,
}

impl ScoringEngine {
    /// Create an engine with the standard keyword tables
    pub fn new() -> Self {
        Self {
            salutation: SalutationAnalyzer::new(),
            content_structure: ContentStructureAnalyzer::new(),
            flow: FlowAnalyzer::new(),
            speech_rate: SpeechRateAnalyzer::new(),
            grammar: GrammarAnalyzer::new(),
            vocabulary_richness: VocabularyRichnessAnalyzer::new(),
            clarity: ClarityAnalyzer::new(),
            engagement: EngagementAnalyzer::new(),
        }
    }

    /// Score a transcript, optionally with its spoken duration in seconds.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// result, and no state is shared across calls.
    pub fn score(&self, transcript: &str, duration_secs: Option<f64>) -> ScoringResult {
        let ctx = TranscriptContext::new(transcript, duration_secs);

        let criterion_scores = CriterionScores {
            salutation: self.salutation.evaluate(&ctx),
            content_structure: self.content_structure.evaluate(&ctx),
            flow: self.flow.evaluate(&ctx),
            speech_rate: self.speech_rate.evaluate(&ctx),
            grammar: self.grammar.evaluate(&ctx),
            vocabulary_richness: self.vocabulary_richness.evaluate(&ctx),
            clarity: self.clarity.evaluate(&ctx),
            engagement: self.engagement.evaluate(&ctx),
        };

        let feedback = CriterionFeedback::from_scores(&criterion_scores);

        ScoringResult {
            overall_score: round2(criterion_scores.total()),
            word_count: ctx.word_count(),
            sentence_count: ctx.sentence_count(),
            criterion_scores,
            feedback,
        }
    }

    /// Score a transcript file
    pub fn score_file(&self, path: &Path, duration_secs: Option<f64>) -> Result<ScoringResult> {
        let transcript = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;
        Ok(self.score(&transcript, duration_secs))
    }

    /// Score multiple transcript files in parallel using rayon.
    ///
    /// Purely a throughput optimization: analyzers share no mutable state,
    /// so results are identical to sequential scoring.
    pub fn score_files(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<ScoringResult>)> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| (p.clone(), self.score_file(p, None)))
            .collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[ScoringResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total: f64 = results.iter().map(|r| r.overall_score).sum();
        AggregateStats {
            transcripts_scored: results.len(),
            average_overall: round2(total / results.len() as f64),
            total_words: results.iter().map(|r| r.word_count).sum(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from scoring multiple transcripts
#[derive(Debug, Default)]
pub struct AggregateStats {
    /// Number of transcripts scored
    pub transcripts_scored: usize,
    /// Average overall score across all transcripts
    pub average_overall: f64,
    /// Total word count across all transcripts
    pub total_words: usize,
}
