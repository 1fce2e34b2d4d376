//! Transcript tokenization shared by all criterion analyzers

/// Lowercase the text and split it into word tokens on whitespace runs.
/// Empty tokens are dropped; empty input yields an empty list.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

/// Split the text into sentences on runs of `.`, `!`, `?`.
/// Each piece is trimmed; empty pieces are dropped.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Read-only view of a transcript, tokenized once per scoring call and
/// shared by every analyzer.
#[derive(Debug, Clone)]
pub struct TranscriptContext<'a> {
    /// Raw transcript text as supplied by the caller
    pub raw: &'a str,
    /// Lowercased copy used for case-insensitive phrase matching
    pub lower: String,
    /// Lowercase word tokens
    pub words: Vec<String>,
    /// Sentence strings
    pub sentences: Vec<String>,
    /// Spoken duration in seconds, when the caller knows it
    pub duration_secs: Option<f64>,
}

impl<'a> TranscriptContext<'a> {
    /// Tokenize a transcript
    pub fn new(raw: &'a str, duration_secs: Option<f64>) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            words: tokenize_words(raw),
            sentences: tokenize_sentences(raw),
            duration_secs,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased_and_split_on_whitespace_runs() {
        let words = tokenize_words("Hello   World\n\tFoo");
        assert_eq!(words, vec!["hello", "world", "foo"]);
    }

    #[test]
    fn empty_input_yields_empty_sequences() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("   \n ").is_empty());
        assert!(tokenize_sentences("").is_empty());
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        let sentences = tokenize_sentences("Hi there!  How are you?? I am fine... ");
        assert_eq!(sentences, vec!["Hi there", "How are you", "I am fine"]);
    }

    #[test]
    fn punctuation_only_input_has_no_words_or_sentences() {
        let ctx = TranscriptContext::new("... !!! ???", None);
        // "..." survives whitespace splitting as a word token, but no sentence
        assert_eq!(ctx.sentence_count(), 0);
        assert_eq!(ctx.word_count(), 3);
    }

    #[test]
    fn context_keeps_duration() {
        let ctx = TranscriptContext::new("My name is Ada.", Some(30.0));
        assert_eq!(ctx.duration_secs, Some(30.0));
        assert_eq!(ctx.word_count(), 4);
        assert_eq!(ctx.sentence_count(), 1);
    }
}
