//! # gradex NLP
//!
//! Production collaborators behind [`gradex_core::NlpToolkit`]:
//!
//! - [`tokenizer`] - Sentence splitting and Treebank-style word tokens
//! - [`stopwords`] - The standard English stopword list
//! - [`readability`] - Flesch reading ease
//! - [`grammar`] - LanguageTool HTTP client
//!
//! [`StandardToolkit::initialize`] is the startup routine; it never fails,
//! falling back to zero grammar issues when LanguageTool is unreachable.

pub mod tokenizer;
pub mod stopwords;
pub mod readability;
pub mod grammar;
pub mod toolkit;

pub use grammar::{GrammarConfig, GrammarError, GrammarIssue, LanguageToolClient};
pub use toolkit::{NlpConfig, StandardToolkit};
