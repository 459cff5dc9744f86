//! # gradex
//!
//! Essay grading service: one synchronous request in, a grade and feedback
//! out.
//!
//! Each essay is reduced to six features (sentence count, content-word
//! count, average sentence length, Flesch reading ease, grammar issue count
//! and lexical diversity), scored with fixed weights and annotated with
//! threshold-based feedback.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! gradex --port 5000 --languagetool-url http://localhost:8081
//! curl -X POST localhost:5000/grade-essay \
//!      -H 'content-type: application/json' \
//!      -d '{"essay_text": "..."}'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use gradex::prelude::*;
//! use std::sync::Arc;
//!
//! let toolkit = StandardToolkit::initialize(&NlpConfig::default());
//! let grader = Grader::new(Arc::new(toolkit));
//! let report = grader.grade("An essay about rivers and the towns built along them.").unwrap();
//! println!("{} / 10: {}", report.grade, report.feedback);
//! ```
//!
//! ## Crate Structure
//!
//! - `gradex-core` - Feature extraction, scoring, feedback, the toolkit seam
//! - `gradex-nlp` - Tokenizer, stopwords, readability, LanguageTool client
//! - `gradex-api` - REST API

// Re-export core types
pub use gradex_core::{
    calculate_score, extract_features, generate_feedback,
    Error, Result, ToolkitError,
    FeatureVector, ScoreResult, ScoreWeights, GradeReport, Grader,
    NlpToolkit, FakeToolkit,
};

// Re-export collaborators
pub use gradex_nlp::{GrammarConfig, LanguageToolClient, NlpConfig, StandardToolkit};

// Re-export API
pub use gradex_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FeatureVector, ScoreResult, GradeReport, Grader,
        Error, Result,
        NlpToolkit, FakeToolkit,
        NlpConfig, GrammarConfig, StandardToolkit,
        RestApi,
    };
}
