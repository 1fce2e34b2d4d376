//! Criterion analyzers for transcript quality

pub mod clarity;
pub mod content_structure;
pub mod engagement;
pub mod flow;
pub mod grammar;
pub mod salutation;
pub mod speech_rate;
pub mod vocabulary_richness;

pub use clarity::ClarityAnalyzer;
pub use content_structure::ContentStructureAnalyzer;
pub use engagement::EngagementAnalyzer;
pub use flow::FlowAnalyzer;
pub use grammar::GrammarAnalyzer;
pub use salutation::SalutationAnalyzer;
pub use speech_rate::SpeechRateAnalyzer;
pub use vocabulary_richness::VocabularyRichnessAnalyzer;

use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionResult};

/// Trait for criterion analyzers.
///
/// Analyzers are pure: `evaluate` never fails and depends only on the shared
/// transcript context, so they are order-independent and parallelizable.
pub trait CriterionAnalyzer {
    /// Which criterion this analyzer scores
    fn criterion(&self) -> Criterion;

    /// Fixed score ceiling for this criterion
    fn max_score(&self) -> f64 {
        self.criterion().max_score()
    }

    /// Evaluate the transcript and produce a bounded sub-score with feedback
    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult;
}
