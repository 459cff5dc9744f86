//! Feedback generator
//!
//! Threshold rules evaluated against a [`FeatureVector`]. The two length
//! rules exclude each other; the remaining rules fire independently and
//! every match is appended in rule order.

use crate::features::FeatureVector;

pub const TOO_SHORT: &str = "Essay is too short and lacks sufficient content for evaluation.";
pub const RELATIVELY_SHORT: &str = "Essay is relatively short, consider adding more content.";
pub const WEAK_STRUCTURE: &str = "Essay lacks sentence structure and complexity.";
pub const LOW_DIVERSITY: &str = "Try using more varied vocabulary.";
pub const NO_ISSUES: &str = "Good essay! Well structured and well written.";

const MIN_WORDS: usize = 20;
const COMFORTABLE_WORDS: usize = 50;
const MIN_AVG_SENTENCE_LENGTH: f64 = 10.0;
const MAX_GRAMMAR_ERRORS: usize = 5;
const MIN_LEXICAL_DIVERSITY: f64 = 0.5;

/// Build the advisory text for an essay. Never fails.
pub fn generate_feedback(features: &FeatureVector) -> String {
    let mut feedback: Vec<String> = Vec::new();

    if features.word_count < MIN_WORDS {
        feedback.push(TOO_SHORT.to_string());
    } else if features.word_count < COMFORTABLE_WORDS {
        feedback.push(RELATIVELY_SHORT.to_string());
    }
    if features.avg_sentence_length < MIN_AVG_SENTENCE_LENGTH {
        feedback.push(WEAK_STRUCTURE.to_string());
    }
    if features.grammar_error_count > MAX_GRAMMAR_ERRORS {
        feedback.push(format!(
            "Found {} grammar errors, consider revising.",
            features.grammar_error_count
        ));
    }
    if features.lexical_diversity < MIN_LEXICAL_DIVERSITY {
        feedback.push(LOW_DIVERSITY.to_string());
    }

    if feedback.is_empty() {
        NO_ISSUES.to_string()
    } else {
        feedback.join(" ")
    }
}
