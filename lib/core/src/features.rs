//! Text analyzer
//!
//! Turns raw essay text into the fixed-shape [`FeatureVector`] consumed by
//! the score calculator and the feedback generator.

use crate::error::Result;
use crate::toolkit::NlpToolkit;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// The six signals extracted from one essay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub sentence_count: usize,
    /// Alphabetic, non-stopword tokens.
    pub word_count: usize,
    /// `word_count / sentence_count`, 0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// Unclamped reading-ease estimate.
    pub readability_score: f64,
    pub grammar_error_count: usize,
    /// Unique filtered words over filtered words, in [0, 1].
    pub lexical_diversity: f64,
}

/// Extract features from `text` using the supplied collaborators.
///
/// Any collaborator failure becomes [`Error::FeatureExtraction`]. Empty
/// word or sentence lists yield zero ratios rather than errors.
pub fn extract_features(text: &str, toolkit: &dyn NlpToolkit) -> Result<FeatureVector> {
    let sentences = toolkit.sentences(text)?;
    let words = toolkit.words(text)?;

    let filtered_words: Vec<String> = words
        .iter()
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .map(|w| w.to_lowercase())
        .filter(|w| !toolkit.is_stopword(w))
        .collect();

    let sentence_count = sentences.len();
    let word_count = filtered_words.len();
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let readability_score = toolkit.readability(text)?;
    let grammar_error_count = toolkit.grammar_issues(text)?;

    let unique_words: AHashSet<&str> = filtered_words.iter().map(String::as_str).collect();
    let lexical_diversity = if word_count > 0 {
        unique_words.len() as f64 / word_count as f64
    } else {
        0.0
    };

    Ok(FeatureVector {
        sentence_count,
        word_count,
        avg_sentence_length,
        readability_score,
        grammar_error_count,
        lexical_diversity,
    })
}
