//! LanguageTool grammar checker client
//!
//! Talks to a LanguageTool HTTP server (`/v2/languages`, `/v2/check`).
//! The underlying `reqwest` client is connection-pooled and safe to share
//! between threads, so one instance serves all concurrent requests.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LANGUAGETOOL_URL: &str = "http://localhost:8081";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("LanguageTool request timed out")]
    Timeout,

    #[error("LanguageTool request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("LanguageTool does not support language {0}")]
    UnsupportedLanguage(String),
}

impl From<reqwest::Error> for GrammarError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GrammarError::Timeout
        } else {
            GrammarError::Request(err)
        }
    }
}

/// Connection settings for the grammar checker.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarConfig {
    /// Server base URL, e.g. `http://localhost:8081`
    pub url: String,
    /// Language code, short (`en`) or long (`en-US`)
    pub language: String,
    /// Upper bound for a single HTTP call
    pub timeout: Duration,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LANGUAGETOOL_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// One flagged grammar or spelling problem.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrammarIssue {
    pub message: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub rule: Option<GrammarRule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrammarRule {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<GrammarIssue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageInfo {
    code: String,
    long_code: String,
}

#[derive(Debug, Clone)]
pub struct LanguageToolClient {
    client: reqwest::blocking::Client,
    check_url: String,
    language: String,
}

impl LanguageToolClient {
    /// Build a client and verify the server is reachable and knows the
    /// configured language.
    pub fn connect(config: &GrammarConfig) -> Result<Self, GrammarError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let base = config.url.trim_end_matches('/');

        let languages: Vec<LanguageInfo> = client
            .get(format!("{base}/v2/languages"))
            .send()?
            .error_for_status()?
            .json()?;
        let supported = languages
            .iter()
            .any(|l| l.long_code == config.language || l.code == config.language);
        if !supported {
            return Err(GrammarError::UnsupportedLanguage(config.language.clone()));
        }

        Ok(Self {
            client,
            check_url: format!("{base}/v2/check"),
            language: config.language.clone(),
        })
    }

    pub fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let response: CheckResponse = self
            .client
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.matches)
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_response_decoding() {
        let body = r#"{
            "software": {"name": "LanguageTool", "version": "6.4"},
            "matches": [
                {"message": "Possible spelling mistake found.", "offset": 4, "length": 5,
                 "rule": {"id": "MORFOLOGIK_RULE_EN_US", "description": "Possible spelling mistake"}},
                {"message": "Use \"an\" instead of \"a\".", "offset": 0, "length": 1,
                 "rule": {"id": "EN_A_VS_AN"}}
            ]
        }"#;
        let response: CheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].offset, 4);
        assert_eq!(response.matches[1].rule.as_ref().unwrap().id, "EN_A_VS_AN");
    }

    #[test]
    fn test_empty_matches_default() {
        let response: CheckResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_unreachable_server_fails_to_connect() {
        let config = GrammarConfig {
            url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_millis(500),
            ..GrammarConfig::default()
        };
        assert!(LanguageToolClient::connect(&config).is_err());
    }
}
