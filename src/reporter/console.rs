//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::ScoringResult;
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show diagnostic details per criterion
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single scoring result
    pub fn report(&self, name: &str, result: &ScoringResult) {
        println!();
        println!("{}", format!("Speech Quality Analysis: {name}").bold());
        println!(
            "   Words: {} | Sentences: {}",
            result.word_count, result.sentence_count
        );
        println!();

        let overall = self.create_score_bar(result.overall_score);
        println!(
            "   Overall: {} {}",
            overall,
            format!("{} / {}", result.overall_score, ScoringResult::MAX_OVERALL as u32).bold()
        );
        println!();

        println!("   {}", "Criterion Breakdown:".bold());
        for (criterion, r) in result.criterion_scores.iter() {
            let bar = self.create_mini_bar(r.score, r.max_score);
            let score_str = format!("{:>4}/{}", r.score, r.max_score as u32);
            let colored_score = if !self.use_colors {
                score_str.normal()
            } else if r.score >= r.max_score * 0.8 {
                score_str.green()
            } else if r.score >= r.max_score * 0.6 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, criterion.label());
            for line in &r.feedback {
                println!("       {} {}", "\u{2192}".dimmed(), line);
            }
            if self.verbose {
                if let Ok(details) = serde_json::to_string(&r.details) {
                    println!("       {}", details.dimmed());
                }
            }
        }
        println!();
    }

    /// Report in quiet mode (just the overall score)
    pub fn report_quiet(&self, name: &str, result: &ScoringResult) {
        println!(
            "{}: {} / {}",
            name,
            result.overall_score,
            ScoringResult::MAX_OVERALL as u32
        );
    }

    /// Report multiple results with a summary
    pub fn report_many(&self, results: &[(String, ScoringResult)], stats: &AggregateStats) {
        for (name, result) in results {
            self.report(name, result);
            println!("{}", "\u{2500}".repeat(60));
        }
        self.print_summary(stats);
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "Summary".bold());
        println!(
            "   Transcripts scored: {}",
            stats.transcripts_scored.to_string().bold()
        );
        println!(
            "   Average overall:    {}",
            stats.average_overall.to_string().bold()
        );
        println!("   Total words:        {}", stats.total_words);
        println!();
    }

    fn create_score_bar(&self, overall: f64) -> String {
        let pct = overall / ScoringResult::MAX_OVERALL;
        let filled = ((pct * 20.0) as usize).min(20);
        let empty = 20 - filled;

        let bar = format!("[{}{}]", "\u{2588}".repeat(filled), "\u{2591}".repeat(empty));
        if !self.use_colors {
            bar
        } else if pct >= 0.8 {
            bar.green().to_string()
        } else if pct >= 0.6 {
            bar.yellow().to_string()
        } else {
            bar.red().to_string()
        }
    }

    fn create_mini_bar(&self, score: f64, max: f64) -> String {
        let filled = ((score / max * 10.0) as usize).min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "\u{2593}".repeat(filled), "\u{2591}".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_within_bounds() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(reporter.create_mini_bar(0.0, 15.0), format!("[{}]", "\u{2591}".repeat(10)));
        assert_eq!(
            reporter.create_mini_bar(15.0, 15.0),
            format!("[{}]", "\u{2593}".repeat(10))
        );
        let half = reporter.create_mini_bar(7.5, 15.0);
        assert!(half.contains('\u{2593}') && half.contains('\u{2591}'));
    }

    #[test]
    fn overall_bar_scales_to_the_110_maximum() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(
            reporter.create_score_bar(ScoringResult::MAX_OVERALL),
            format!("[{}]", "\u{2588}".repeat(20))
        );
        assert_eq!(
            reporter.create_score_bar(0.0),
            format!("[{}]", "\u{2591}".repeat(20))
        );
    }
}
