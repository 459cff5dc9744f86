//! NLP collaborator seam
//!
//! The analyzer never tokenizes, scores readability or checks grammar on its
//! own. It asks an [`NlpToolkit`] instead, so the production stack and the
//! deterministic [`FakeToolkit`] used in tests are interchangeable.

use crate::error::ToolkitError;
use ahash::AHashSet;

/// Capability set the text analyzer depends on.
///
/// Implementations are shared across concurrent requests and must be safe
/// to call from several threads at once.
pub trait NlpToolkit: Send + Sync {
    /// Split raw text into sentences.
    fn sentences(&self, text: &str) -> Result<Vec<String>, ToolkitError>;

    /// Split raw text into word and punctuation tokens.
    fn words(&self, text: &str) -> Result<Vec<String>, ToolkitError>;

    /// Whether a lower-cased token is an English stopword.
    fn is_stopword(&self, word: &str) -> bool;

    /// Reading-ease estimate for the untokenized text.
    fn readability(&self, text: &str) -> Result<f64, ToolkitError>;

    /// Number of grammar issues found in the text.
    ///
    /// A toolkit without a working grammar checker reports `Ok(0)`.
    fn grammar_issues(&self, text: &str) -> Result<usize, ToolkitError>;
}

#[derive(Debug, Clone, PartialEq)]
enum FakeGrammar {
    Issues(usize),
    Fail(String),
}

/// Deterministic toolkit for tests.
///
/// Sentences end at `.`, `!` or `?`; words are whitespace-separated with
/// surrounding ASCII punctuation stripped. Readability and grammar results
/// are fixed up front.
#[derive(Debug, Clone)]
pub struct FakeToolkit {
    stopwords: AHashSet<String>,
    readability: f64,
    grammar: FakeGrammar,
}

const FAKE_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "is", "it", "of",
    "on", "or", "so", "that", "the", "this", "to", "was", "were", "with",
];

impl FakeToolkit {
    pub fn new() -> Self {
        Self {
            stopwords: FAKE_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            readability: 0.0,
            grammar: FakeGrammar::Issues(0),
        }
    }

    #[must_use]
    pub fn with_readability(mut self, score: f64) -> Self {
        self.readability = score;
        self
    }

    #[must_use]
    pub fn with_grammar_issues(mut self, count: usize) -> Self {
        self.grammar = FakeGrammar::Issues(count);
        self
    }

    /// Make every grammar check fail with the given message.
    #[must_use]
    pub fn with_failing_grammar(mut self, message: impl Into<String>) -> Self {
        self.grammar = FakeGrammar::Fail(message.into());
        self
    }
}

impl Default for FakeToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpToolkit for FakeToolkit {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        Ok(text
            .split_inclusive(|c: char| matches!(c, '.' | '!' | '?'))
            .map(str::trim)
            .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
            .map(str::to_string)
            .collect())
    }

    fn words(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        Ok(text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    fn readability(&self, _text: &str) -> Result<f64, ToolkitError> {
        Ok(self.readability)
    }

    fn grammar_issues(&self, _text: &str) -> Result<usize, ToolkitError> {
        match &self.grammar {
            FakeGrammar::Issues(count) => Ok(*count),
            FakeGrammar::Fail(message) => Err(ToolkitError::Grammar(message.clone())),
        }
    }
}
