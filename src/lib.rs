//! Podium: speech quality analyzer for self-introduction transcripts
//!
//! This library scores a speech transcript (optionally with its spoken
//! duration) across eight independent heuristic criteria and produces a
//! per-criterion breakdown with human-readable feedback.

pub mod analyzer;
pub mod config;
pub mod reporter;
pub mod server;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

/// The eight scored criteria, in wire/aggregation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Opening greeting quality
    Salutation,
    /// Coverage of must-have and good-to-have introduction topics
    ContentStructure,
    /// Whether sections appear in a sensible order
    Flow,
    /// Words per minute (requires duration)
    SpeechRate,
    /// Common grammar error patterns
    Grammar,
    /// Lexical diversity (type-token ratio)
    VocabularyRichness,
    /// Filler word density
    Clarity,
    /// Sentiment/tone of the delivery
    Engagement,
}

impl Criterion {
    /// All criteria in scoring order
    pub const ALL: [Criterion; 8] = [
        Criterion::Salutation,
        Criterion::ContentStructure,
        Criterion::Flow,
        Criterion::SpeechRate,
        Criterion::Grammar,
        Criterion::VocabularyRichness,
        Criterion::Clarity,
        Criterion::Engagement,
    ];

    /// Fixed maximum score for this criterion
    pub fn max_score(&self) -> f64 {
        match self {
            Criterion::Salutation => 5.0,
            Criterion::ContentStructure => 30.0,
            Criterion::Flow => 10.0,
            Criterion::SpeechRate => 10.0,
            Criterion::Grammar => 10.0,
            Criterion::VocabularyRichness => 15.0,
            Criterion::Clarity => 15.0,
            Criterion::Engagement => 15.0,
        }
    }

    /// Human-readable display name
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Salutation => "Salutation",
            Criterion::ContentStructure => "Content Structure",
            Criterion::Flow => "Flow",
            Criterion::SpeechRate => "Speech Rate",
            Criterion::Grammar => "Grammar",
            Criterion::VocabularyRichness => "Vocabulary Richness",
            Criterion::Clarity => "Clarity",
            Criterion::Engagement => "Engagement",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Salutation => write!(f, "salutation"),
            Criterion::ContentStructure => write!(f, "contentStructure"),
            Criterion::Flow => write!(f, "flow"),
            Criterion::SpeechRate => write!(f, "speechRate"),
            Criterion::Grammar => write!(f, "grammar"),
            Criterion::VocabularyRichness => write!(f, "vocabularyRichness"),
            Criterion::Clarity => write!(f, "clarity"),
            Criterion::Engagement => write!(f, "engagement"),
        }
    }
}

/// Result of evaluating one criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    /// Points awarded (0 <= score <= max_score)
    pub score: f64,
    /// Fixed ceiling for this criterion
    pub max_score: f64,
    /// Human-readable feedback lines
    pub feedback: Vec<String>,
    /// Diagnostic values backing the score
    pub details: CriterionDetails,
}

/// Salutation tier reached by the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalutationTier {
    Excellent,
    Good,
    Normal,
    None,
}

impl std::fmt::Display for SalutationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalutationTier::Excellent => write!(f, "excellent"),
            SalutationTier::Good => write!(f, "good"),
            SalutationTier::Normal => write!(f, "normal"),
            SalutationTier::None => write!(f, "none"),
        }
    }
}

/// Per-criterion diagnostic details.
///
/// Serialized untagged so the wire shape is a flat object of primitives per
/// criterion while staying statically typed. `SpeechRate` must stay the last
/// variant: its only field is optional, so during deserialization it would
/// shadow any variant listed after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionDetails {
    #[serde(rename_all = "camelCase")]
    Salutation {
        #[serde(rename = "type")]
        tier: SalutationTier,
    },
    #[serde(rename_all = "camelCase")]
    ContentStructure {
        found_must_have: bool,
        found_good_to_have: bool,
    },
    #[serde(rename_all = "camelCase")]
    Flow { order_followed: bool },
    #[serde(rename_all = "camelCase")]
    Grammar { error_count: usize, errors_per100: f64 },
    #[serde(rename_all = "camelCase")]
    VocabularyRichness {
        ttr: f64,
        unique_words: usize,
        total_words: usize,
    },
    #[serde(rename_all = "camelCase")]
    Clarity { filler_count: usize, filler_rate: f64 },
    #[serde(rename_all = "camelCase")]
    Engagement {
        sentiment_score: f64,
        positive_words: usize,
        negative_words: usize,
    },
    #[serde(rename_all = "camelCase")]
    SpeechRate { wpm: Option<u32> },
}

/// Per-criterion results with fixed keys (every criterion always present)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScores {
    pub salutation: CriterionResult,
    pub content_structure: CriterionResult,
    pub flow: CriterionResult,
    pub speech_rate: CriterionResult,
    pub grammar: CriterionResult,
    pub vocabulary_richness: CriterionResult,
    pub clarity: CriterionResult,
    pub engagement: CriterionResult,
}

impl CriterionScores {
    /// Get the result for a criterion
    pub fn get(&self, criterion: Criterion) -> &CriterionResult {
        match criterion {
            Criterion::Salutation => &self.salutation,
            Criterion::ContentStructure => &self.content_structure,
            Criterion::Flow => &self.flow,
            Criterion::SpeechRate => &self.speech_rate,
            Criterion::Grammar => &self.grammar,
            Criterion::VocabularyRichness => &self.vocabulary_richness,
            Criterion::Clarity => &self.clarity,
            Criterion::Engagement => &self.engagement,
        }
    }

    /// Iterate all criteria in scoring order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &CriterionResult)> {
        Criterion::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Sum of all criterion scores (unrounded)
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, r)| r.score).sum()
    }
}

/// Per-criterion feedback lines, keyed identically to [`CriterionScores`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionFeedback {
    pub salutation: Vec<String>,
    pub content_structure: Vec<String>,
    pub flow: Vec<String>,
    pub speech_rate: Vec<String>,
    pub grammar: Vec<String>,
    pub vocabulary_richness: Vec<String>,
    pub clarity: Vec<String>,
    pub engagement: Vec<String>,
}

impl CriterionFeedback {
    /// Build the feedback map from already-computed criterion results
    pub fn from_scores(scores: &CriterionScores) -> Self {
        Self {
            salutation: scores.salutation.feedback.clone(),
            content_structure: scores.content_structure.feedback.clone(),
            flow: scores.flow.feedback.clone(),
            speech_rate: scores.speech_rate.feedback.clone(),
            grammar: scores.grammar.feedback.clone(),
            vocabulary_richness: scores.vocabulary_richness.feedback.clone(),
            clarity: scores.clarity.feedback.clone(),
            engagement: scores.engagement.feedback.clone(),
        }
    }

    /// Get the feedback for a criterion
    pub fn get(&self, criterion: Criterion) -> &[String] {
        match criterion {
            Criterion::Salutation => &self.salutation,
            Criterion::ContentStructure => &self.content_structure,
            Criterion::Flow => &self.flow,
            Criterion::SpeechRate => &self.speech_rate,
            Criterion::Grammar => &self.grammar,
            Criterion::VocabularyRichness => &self.vocabulary_richness,
            Criterion::Clarity => &self.clarity,
            Criterion::Engagement => &self.engagement,
        }
    }
}

/// The full scoring result for one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Sum of all criterion scores, rounded to 2 decimals
    pub overall_score: f64,
    /// Per-criterion results
    pub criterion_scores: CriterionScores,
    /// Number of word tokens in the transcript
    pub word_count: usize,
    /// Number of sentences in the transcript
    pub sentence_count: usize,
    /// Per-criterion feedback, keyed identically to `criterion_scores`
    pub feedback: CriterionFeedback,
}

impl ScoringResult {
    /// Maximum possible overall score (sum of the fixed per-criterion maxima)
    pub const MAX_OVERALL: f64 = 110.0;
}

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
