//! # gradex Core
//!
//! Core library for the gradex essay grader.
//!
//! This crate provides the scoring pipeline:
//!
//! - [`extract_features`] - Text analyzer producing a [`FeatureVector`]
//! - [`calculate_score`] - Fixed-weight score calculator
//! - [`generate_feedback`] - Threshold-rule feedback generator
//! - [`Grader`] - Validation plus the three stages above
//! - [`NlpToolkit`] - The collaborator seam, with [`FakeToolkit`] for tests
//!
//! ## Example
//!
//! ```rust
//! use gradex_core::{FakeToolkit, Grader};
//! use std::sync::Arc;
//!
//! let grader = Grader::new(Arc::new(FakeToolkit::new().with_readability(65.0)));
//! let report = grader.grade("Short essays are graded too.").unwrap();
//! assert!(report.grade >= 1.0 && report.grade <= 10.0);
//! ```

pub mod error;
pub mod toolkit;
pub mod features;
pub mod score;
pub mod feedback;
pub mod grader;

pub use error::{Error, Result, ToolkitError};
pub use toolkit::{FakeToolkit, NlpToolkit};
pub use features::{extract_features, FeatureVector};
pub use score::{calculate_score, round_to, ScoreComponents, ScoreResult, ScoreWeights};
pub use feedback::generate_feedback;
pub use grader::{GradeReport, Grader};
