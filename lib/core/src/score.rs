//! Score calculator
//!
//! Fixed linear weighting of readability, grammar and vocabulary signals
//! into a 0-100 percentage and a 1-10 grade.

use crate::error::{Error, Result};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Weights of the three score components. They always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub readability: f64,
    pub grammar: f64,
    pub diversity: f64,
}

impl ScoreWeights {
    /// The only weighting the grader uses.
    pub const FIXED: ScoreWeights = ScoreWeights {
        readability: 0.4,
        grammar: 0.3,
        diversity: 0.3,
    };

    pub fn sum(&self) -> f64 {
        self.readability + self.grammar + self.diversity
    }
}

/// Points removed from the grammar component per reported issue.
pub const GRAMMAR_PENALTY_PER_ERROR: f64 = 10.0;

/// Per-component values on the 0-100 scale, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub readability: f64,
    pub grammar: f64,
    pub diversity: f64,
}

impl ScoreComponents {
    pub fn from_features(features: &FeatureVector) -> Self {
        // Ten or more errors saturate the grammar component at zero.
        let penalty = features.grammar_error_count as f64 * GRAMMAR_PENALTY_PER_ERROR;
        Self {
            readability: features.readability_score.clamp(0.0, 100.0),
            grammar: (100.0 - penalty).max(0.0),
            diversity: features.lexical_diversity * 100.0,
        }
    }

    pub fn weighted_total(&self, weights: &ScoreWeights) -> f64 {
        self.readability * weights.readability
            + self.grammar * weights.grammar
            + self.diversity * weights.diversity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// In [1, 10], one decimal place.
    pub grade: f64,
    /// In [0, 100], one decimal place.
    pub percentage: f64,
}

/// Compute the grade and percentage for a feature vector.
///
/// Fails with [`Error::ScoreCalculation`] only when a feature is NaN or
/// infinite.
pub fn calculate_score(features: &FeatureVector) -> Result<ScoreResult> {
    for (name, value) in [
        ("readability score", features.readability_score),
        ("lexical diversity", features.lexical_diversity),
        ("average sentence length", features.avg_sentence_length),
    ] {
        if !value.is_finite() {
            return Err(Error::ScoreCalculation(format!("{name} is not a finite number ({value})")));
        }
    }

    let raw_percentage = ScoreComponents::from_features(features).weighted_total(&ScoreWeights::FIXED);
    let grade = (raw_percentage / 10.0).clamp(1.0, 10.0);

    Ok(ScoreResult {
        grade: round_to(grade, 1),
        percentage: round_to(raw_percentage, 1),
    })
}

/// Round half away from zero to `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn features(readability: f64, grammar_errors: usize, diversity: f64) -> FeatureVector {
        FeatureVector {
            sentence_count: 5,
            word_count: 60,
            avg_sentence_length: 12.0,
            readability_score: readability,
            grammar_error_count: grammar_errors,
            lexical_diversity: diversity,
        }
    }

    #[test]
    fn test_fixed_weights_sum_to_one() {
        assert!((ScoreWeights::FIXED.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_essay() {
        let result = calculate_score(&features(70.0, 0, 40.0 / 60.0)).unwrap();
        assert_eq!(result.percentage, 78.0);
        assert_eq!(result.grade, 7.8);
    }

    #[test]
    fn test_grammar_penalty() {
        let components = ScoreComponents::from_features(&features(50.0, 8, 0.5));
        assert!((components.grammar - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_grammar_saturates_at_ten_errors() {
        for errors in [10, 11, 500] {
            let components = ScoreComponents::from_features(&features(50.0, errors, 0.5));
            assert_eq!(components.grammar, 0.0);
        }
    }

    #[test]
    fn test_readability_clamped_only_for_scoring() {
        let high = calculate_score(&features(180.0, 0, 1.0)).unwrap();
        assert_eq!(high.percentage, 100.0);
        assert_eq!(high.grade, 10.0);

        let low = calculate_score(&features(-250.0, 20, 0.0)).unwrap();
        assert_eq!(low.percentage, 0.0);
        assert_eq!(low.grade, 1.0);
    }

    #[test]
    fn test_non_finite_feature_rejected() {
        let err = calculate_score(&features(f64::NAN, 0, 0.5)).unwrap_err();
        assert!(matches!(err, Error::ScoreCalculation(_)));
        assert!(err.to_string().starts_with("Score calculation failed: readability score"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(78.01, 1), 78.0);
        assert_eq!(round_to(0.666_666, 2), 0.67);
        assert_eq!(round_to(-12.35, 1), -12.4);
    }

    proptest! {
        #[test]
        fn prop_grade_and_percentage_bounded(
            readability in -1.0e6f64..1.0e6,
            errors in 0usize..1000,
            diversity in 0.0f64..=1.0,
        ) {
            let result = calculate_score(&features(readability, errors, diversity)).unwrap();
            prop_assert!((1.0..=10.0).contains(&result.grade));
            prop_assert!((0.0..=100.0).contains(&result.percentage));
        }

        #[test]
        fn prop_saturated_grammar_contributes_nothing(
            readability in 0.0f64..=100.0,
            errors in 10usize..10_000,
            diversity in 0.0f64..=1.0,
        ) {
            let saturated = ScoreComponents::from_features(&features(readability, errors, diversity));
            prop_assert_eq!(saturated.grammar, 0.0);
            let expected = readability * 0.4 + diversity * 100.0 * 0.3;
            prop_assert!((saturated.weighted_total(&ScoreWeights::FIXED) - expected).abs() < 1e-9);
        }
    }
}
