//! Flesch reading ease
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`,
//! rounded to two decimals. Higher is easier; the scale is unbounded.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("valid sentence span regex"));

/// Spans with this many words or fewer do not count as sentences.
const MIN_SENTENCE_WORDS: usize = 2;

pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = lexicon(text);
    let word_count = words.len();
    let sentences = sentence_count(text);

    let sentence_length = ratio(word_count, sentences);
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let syllables_per_word = ratio(syllables, word_count);

    let score = 206.835 - 1.015 * sentence_length - 84.6 * syllables_per_word;
    (score * 100.0).round() / 100.0
}

/// Whitespace-separated words after punctuation other than apostrophes
/// has been removed.
fn lexicon(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '\'')
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

fn sentence_count(text: &str) -> usize {
    let counted = SENTENCE_SPAN_RE
        .find_iter(text)
        .filter(|span| lexicon(span.as_str()).len() > MIN_SENTENCE_WORDS)
        .count();
    counted.max(1)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Estimate syllables from vowel groups. Every word has at least one.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.len() <= 3 {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    let ends_with = |suffix: &str| letters.iter().rev().zip(suffix.chars().rev()).all(|(a, b)| *a == b);
    let before = |offset: usize| letters.get(n.wrapping_sub(offset)).copied();

    if groups > 1 {
        if ends_with("e") && !ends_with("le") && !ends_with("ee") {
            // silent e: "make", "hope"
            groups -= 1;
        } else if ends_with("ed") && !matches!(before(3), Some('t' | 'd')) {
            // "jumped", but not "wanted"
            groups -= 1;
        } else if ends_with("es") && !matches!(before(3), Some('s' | 'x' | 'z' | 'h' | 'c' | 'g')) {
            // "makes", but not "boxes" or "changes"
            groups -= 1;
        }
    }

    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("make"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("jumped"), 1);
        assert_eq!(syllable_count("wanted"), 2);
        assert_eq!(syllable_count("boxes"), 2);
        assert_eq!(syllable_count("beautiful"), 3);
        assert_eq!(syllable_count("Readability,"), 5);
        assert_eq!(syllable_count("42"), 1);
    }

    #[test]
    fn test_simple_text_reads_easily() {
        let score = flesch_reading_ease("The cat sat on the mat. The dog ran to the park.");
        assert!(score > 90.0, "score was {score}");
    }

    #[test]
    fn test_dense_text_reads_hard() {
        let score = flesch_reading_ease(
            "Institutional accountability necessitates comprehensive organizational \
             transparency regarding administrative decision-making methodologies.",
        );
        assert!(score < 0.0, "score was {score}");
    }

    #[test]
    fn test_punctuation_only_has_no_words() {
        assert_eq!(flesch_reading_ease("?!"), 206.84);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let score = flesch_reading_ease("Some words make a sentence here today.");
        assert_eq!(score, (score * 100.0).round() / 100.0);
    }
}
