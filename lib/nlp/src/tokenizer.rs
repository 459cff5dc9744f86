//! Sentence and word tokenization
//!
//! Sentences break after terminal punctuation followed by whitespace or the
//! end of input, except after known abbreviations and single-letter
//! initials. Words follow Treebank conventions: punctuation becomes its own
//! token and contractions are split from their stem.

use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).expect("valid sentence regex")
});

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:[-'\u{2019}]\w+)*|[^\w\s]+").expect("valid word regex")
});

static ABBREVIATIONS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e",
        "cf", "al", "inc", "ltd", "co", "corp", "dept", "fig", "approx", "no", "vol", "jan",
        "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s",
        "u.k", "a.m", "p.m",
    ]
    .into_iter()
    .collect()
});

const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        let body = &text[start..m.start()];
        let at_end = m.end() == text.len();
        if !at_end && m.as_str().starts_with('.') && ends_with_abbreviation(body) {
            continue;
        }
        push_trimmed(&mut sentences, &text[start..m.end()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Split text into word and punctuation tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in WORD_RE.find_iter(text) {
        let token = m.as_str().replace('\u{2019}', "'");
        match split_contraction(&token) {
            Some((stem, suffix)) => {
                tokens.push(stem.to_string());
                tokens.push(suffix.to_string());
            }
            None => tokens.push(token),
        }
    }
    tokens
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn ends_with_abbreviation(body: &str) -> bool {
    let Some(last) = body.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| !c.is_alphanumeric());
    let mut chars = last.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        // Initials like "J. K. Rowling"
        return first.is_uppercase();
    }
    ABBREVIATIONS.contains(last.to_lowercase().as_str())
}

fn split_contraction(token: &str) -> Option<(&str, &str)> {
    let lower = token.to_lowercase();
    CONTRACTION_SUFFIXES.iter().find_map(|suffix| {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            let cut = token.len() - suffix.len();
            token.is_char_boundary(cut).then(|| token.split_at(cut))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("It rained. We stayed in!  Did you?");
        assert_eq!(sentences, vec!["It rained.", "We stayed in!", "Did you?"]);
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        assert_eq!(split_sentences("no punctuation at all"), vec!["no punctuation at all"]);
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn test_abbreviations_do_not_break() {
        let sentences = split_sentences("Dr. Smith met Mr. Jones, e.g. at noon. Then J. K. left.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith met Mr. Jones, e.g. at noon.", "Then J. K. left."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let sentences = split_sentences("He said \"stop.\" She did.");
        assert_eq!(sentences, vec!["He said \"stop.\"", "She did."]);
    }

    #[test]
    fn test_decimal_numbers_do_not_break() {
        assert_eq!(split_sentences("Pi is 3.14 roughly."), vec!["Pi is 3.14 roughly."]);
    }

    #[test]
    fn test_word_tokens() {
        assert_eq!(
            tokenize_words("Hello, world... it's well-known!"),
            vec!["Hello", ",", "world", "...", "it", "'s", "well-known", "!"]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tokenize_words("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize_words("They\u{2019}re"), vec!["They", "'re"]);
        assert_eq!(tokenize_words("I'm"), vec!["I", "'m"]);
    }
}
