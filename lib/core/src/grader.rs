//! Grading pipeline
//!
//! validate -> extract features -> score -> feedback -> report.

use crate::error::{Error, Result};
use crate::features::{extract_features, FeatureVector};
use crate::feedback::generate_feedback;
use crate::score::{calculate_score, round_to, ScoreResult};
use crate::toolkit::NlpToolkit;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Response body of a successful grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub grade: f64,
    pub percentage: f64,
    pub feedback: String,
    pub grammar_errors: usize,
    /// Rounded to two decimals.
    pub vocabulary_diversity: f64,
    /// Unclamped, rounded to one decimal.
    pub readability_score: f64,
}

impl GradeReport {
    pub fn new(features: &FeatureVector, score: ScoreResult, feedback: String) -> Self {
        Self {
            grade: score.grade,
            percentage: score.percentage,
            feedback,
            grammar_errors: features.grammar_error_count,
            vocabulary_diversity: round_to(features.lexical_diversity, 2),
            readability_score: round_to(features.readability_score, 1),
        }
    }
}

/// Grades essays against a shared, read-only toolkit.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct Grader {
    toolkit: Arc<dyn NlpToolkit>,
}

impl Grader {
    pub fn new(toolkit: Arc<dyn NlpToolkit>) -> Self {
        Self { toolkit }
    }

    /// Grade one essay.
    ///
    /// Text is trimmed first; empty text fails with [`Error::InvalidInput`]
    /// before any collaborator runs.
    pub fn grade(&self, essay_text: &str) -> Result<GradeReport> {
        let text = essay_text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput);
        }

        let features = extract_features(text, self.toolkit.as_ref())?;
        debug!(?features, "extracted features");

        let score = calculate_score(&features)?;
        debug!(grade = score.grade, percentage = score.percentage, "calculated score");

        let feedback = generate_feedback(&features);
        Ok(GradeReport::new(&features, score, feedback))
    }
}

impl std::fmt::Debug for Grader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{NO_ISSUES, TOO_SHORT};
    use crate::toolkit::FakeToolkit;

    /// 5 sentences, 60 content words, 40 of them distinct.
    fn reference_essay() -> String {
        let distinct: Vec<String> = (0..40).map(|i| format!("word{}", letter_tag(i))).collect();
        let mut words: Vec<&str> = distinct.iter().map(String::as_str).collect();
        words.extend(distinct.iter().take(20).map(String::as_str));
        words
            .chunks(12)
            .map(|chunk| format!("{}.", chunk.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn letter_tag(i: usize) -> String {
        let a = (b'a' + (i / 26) as u8) as char;
        let b = (b'a' + (i % 26) as u8) as char;
        format!("{a}{b}")
    }

    fn grader(toolkit: FakeToolkit) -> Grader {
        Grader::new(Arc::new(toolkit))
    }

    #[test]
    fn test_reference_essay_report() {
        let report = grader(FakeToolkit::new().with_readability(70.0))
            .grade(&reference_essay())
            .unwrap();
        assert_eq!(report.grade, 7.8);
        assert_eq!(report.percentage, 78.0);
        assert_eq!(report.feedback, NO_ISSUES);
        assert_eq!(report.grammar_errors, 0);
        assert_eq!(report.vocabulary_diversity, 0.67);
        assert_eq!(report.readability_score, 70.0);
    }

    #[test]
    fn test_blank_text_rejected() {
        let grader = grader(FakeToolkit::new());
        assert_eq!(grader.grade(""), Err(Error::InvalidInput));
        assert_eq!(grader.grade(" \n\t "), Err(Error::InvalidInput));
    }

    #[test]
    fn test_short_essay_feedback() {
        let report = grader(FakeToolkit::new().with_readability(90.0))
            .grade("Cats purr softly.")
            .unwrap();
        assert!(report.feedback.starts_with(TOO_SHORT));
    }

    #[test]
    fn test_readability_reported_unclamped() {
        let report = grader(FakeToolkit::new().with_readability(-48.26))
            .grade("Incomprehensibly sesquipedalian verbosity.")
            .unwrap();
        assert_eq!(report.readability_score, -48.3);
    }

    #[test]
    fn test_grading_is_idempotent() {
        let grader = grader(FakeToolkit::new().with_readability(55.0).with_grammar_issues(3));
        let essay = reference_essay();
        assert_eq!(grader.grade(&essay).unwrap(), grader.grade(&essay).unwrap());
    }

    #[test]
    fn test_collaborator_failure_propagates() {
        let err = grader(FakeToolkit::new().with_failing_grammar("server gone"))
            .grade("Some text.")
            .unwrap_err();
        assert!(matches!(err, Error::FeatureExtraction(_)));
    }
}
