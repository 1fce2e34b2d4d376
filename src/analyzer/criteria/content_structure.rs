//! Content structure scoring - must-have and good-to-have topic coverage

use super::CriterionAnalyzer;
use crate::tokenizer::TranscriptContext;
use crate::{Criterion, CriterionDetails, CriterionResult};

/// A labeled topic with its trigger phrases
#[derive(Debug, Clone)]
pub struct Topic {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

const MUST_HAVE_POINTS: f64 = 4.0;
const GOOD_TO_HAVE_POINTS: f64 = 2.0;

/// Raw-sum threshold above which the core topics count as covered
const MUST_HAVE_THRESHOLD: f64 = 16.0;
/// Raw-sum threshold above which enrichment topics count as covered
const GOOD_TO_HAVE_THRESHOLD: f64 = 20.0;

/// Scores topic coverage: five must-have topics worth 4 points each and five
/// good-to-have topics worth 2 points each, matched as case-insensitive
/// substrings over the whole transcript. The raw sum caps at exactly the
/// criterion maximum, and the coverage flags in the details are evaluated on
/// the pre-cap raw sum.
pub struct ContentStructureAnalyzer {
    must_have: Vec<Topic>,
    good_to_have: Vec<Topic>,
}

impl ContentStructureAnalyzer {
    pub fn new() -> Self {
        Self {
            must_have: vec![
                Topic {
                    label: "Name",
                    triggers: &["name", "myself", "i am", "i'm"],
                },
                Topic {
                    label: "Age",
                    triggers: &["age", "years old", "year old"],
                },
                Topic {
                    label: "School",
                    triggers: &["school", "class", "grade", "studying"],
                },
                Topic {
                    label: "Family",
                    triggers: &["family", "parents", "mother", "father", "siblings"],
                },
                Topic {
                    label: "Hobbies",
                    triggers: &[
                        "hobby",
                        "hobbies",
                        "enjoy",
                        "like",
                        "love",
                        "interest",
                        "free time",
                        "play",
                    ],
                },
            ],
            good_to_have: vec![
                Topic {
                    label: "About Family",
                    triggers: &["family is", "people in my family", "live with"],
                },
                Topic {
                    label: "Origin",
                    triggers: &["from", "born in", "live in"],
                },
                Topic {
                    label: "Ambition",
                    triggers: &["want to", "goal", "dream", "ambition", "future"],
                },
                Topic {
                    label: "Unique Fact",
                    triggers: &[
                        "fun fact",
                        "interesting",
                        "special thing",
                        "unique",
                        "don't know about me",
                    ],
                },
                Topic {
                    label: "Strengths",
                    triggers: &["good at", "strength", "achievement", "proud"],
                },
            ],
        }
    }

    /// Replace the topic tables (for tests with substitute tables)
    pub fn with_topics(mut self, must_have: Vec<Topic>, good_to_have: Vec<Topic>) -> Self {
        self.must_have = must_have;
        self.good_to_have = good_to_have;
        self
    }
}

impl Default for ContentStructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionAnalyzer for ContentStructureAnalyzer {
    fn criterion(&self) -> Criterion {
        Criterion::ContentStructure
    }

    fn evaluate(&self, ctx: &TranscriptContext<'_>) -> CriterionResult {
        let text = &ctx.lower;
        let mut feedback = Vec::new();
        let mut raw = 0.0;

        for topic in &self.must_have {
            if topic.triggers.iter().any(|t| text.contains(t)) {
                raw += MUST_HAVE_POINTS;
                feedback.push(format!("\u{2713} {} mentioned", topic.label));
            } else {
                feedback.push(format!("\u{2717} {} missing", topic.label));
            }
        }

        for topic in &self.good_to_have {
            if topic.triggers.iter().any(|t| text.contains(t)) {
                raw += GOOD_TO_HAVE_POINTS;
                feedback.push(format!("+ {} included", topic.label));
            }
        }

        CriterionResult {
            score: raw.min(self.max_score()),
            max_score: self.max_score(),
            feedback,
            details: CriterionDetails::ContentStructure {
                found_must_have: raw >= MUST_HAVE_THRESHOLD,
                found_good_to_have: raw > GOOD_TO_HAVE_THRESHOLD,
            },
        }
    }
}
