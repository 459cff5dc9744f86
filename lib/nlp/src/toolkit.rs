//! Production [`NlpToolkit`] and its startup routine

use crate::grammar::{GrammarConfig, GrammarError, LanguageToolClient};
use crate::{readability, stopwords, tokenizer};
use gradex_core::{NlpToolkit, ToolkitError};
use tracing::{info, warn};

/// Startup configuration for the NLP collaborators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NlpConfig {
    /// `None` skips grammar checking entirely.
    pub grammar: Option<GrammarConfig>,
}

/// Tokenizer, stopwords, Flesch readability and an optional LanguageTool
/// client.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct StandardToolkit {
    grammar: Option<LanguageToolClient>,
}

impl StandardToolkit {
    /// Initialize every collaborator.
    ///
    /// A grammar checker that cannot be reached is logged and left out; the
    /// toolkit then reports zero grammar issues for every text.
    pub fn initialize(config: &NlpConfig) -> Self {
        let grammar = match &config.grammar {
            None => {
                info!("Grammar checking disabled");
                None
            }
            Some(grammar_config) => match LanguageToolClient::connect(grammar_config) {
                Ok(client) => {
                    info!(url = %grammar_config.url, language = client.language(), "Grammar checker ready");
                    Some(client)
                }
                Err(e) => {
                    warn!("Grammar checker initialization failed: {}; grammar errors will be reported as 0", e);
                    None
                }
            },
        };
        Self { grammar }
    }

    pub fn without_grammar() -> Self {
        Self { grammar: None }
    }

    pub fn with_grammar(client: LanguageToolClient) -> Self {
        Self { grammar: Some(client) }
    }

    pub fn grammar_available(&self) -> bool {
        self.grammar.is_some()
    }
}

impl NlpToolkit for StandardToolkit {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        Ok(tokenizer::split_sentences(text))
    }

    fn words(&self, text: &str) -> Result<Vec<String>, ToolkitError> {
        Ok(tokenizer::tokenize_words(text))
    }

    fn is_stopword(&self, word: &str) -> bool {
        stopwords::is_stopword(word)
    }

    fn readability(&self, text: &str) -> Result<f64, ToolkitError> {
        Ok(readability::flesch_reading_ease(text))
    }

    fn grammar_issues(&self, text: &str) -> Result<usize, ToolkitError> {
        let Some(client) = &self.grammar else {
            return Ok(0);
        };
        match client.check(text) {
            Ok(issues) => Ok(issues.len()),
            Err(GrammarError::Timeout) => {
                warn!("Grammar check timed out; counting 0 issues");
                Ok(0)
            }
            Err(e) => Err(ToolkitError::Grammar(e.to_string())),
        }
    }
}
