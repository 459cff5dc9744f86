use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the grading pipeline.
///
/// The `Display` output of every variant is what the HTTP layer returns
/// to callers, so messages must not leak internals beyond the cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No valid essay text provided")]
    InvalidInput,

    #[error("Feature extraction failed: {0}")]
    FeatureExtraction(String),

    #[error("Score calculation failed: {0}")]
    ScoreCalculation(String),
}

/// Failure reported by one of the NLP collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolkitError {
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("readability error: {0}")]
    Readability(String),

    #[error("grammar checker error: {0}")]
    Grammar(String),
}

impl From<ToolkitError> for Error {
    fn from(err: ToolkitError) -> Self {
        Error::FeatureExtraction(err.to_string())
    }
}
