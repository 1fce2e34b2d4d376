//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::ScoringResult;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single scoring result as JSON
    pub fn report(&self, result: &ScoringResult) -> String {
        self.serialize(result, "{}")
    }

    /// Report multiple results with a summary
    pub fn report_with_summary(
        &self,
        results: &[(String, ScoringResult)],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results: results
                .iter()
                .map(|(name, result)| JsonEntry { name, result })
                .collect(),
            summary: JsonSummary {
                transcripts_scored: stats.transcripts_scored,
                average_overall: stats.average_overall,
                total_words: stats.total_words,
            },
        };
        self.serialize(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<JsonEntry<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a ScoringResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    transcripts_scored: usize,
    average_overall: f64,
    total_words: usize,
}
