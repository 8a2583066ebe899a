//! Lexicon-based English analyzer adapter.
//!
//! Implements `LanguageAnalyzer` without a statistical model:
//!
//! - words are segmented with Unicode word boundaries (UAX #29)
//! - closed-class words are tagged from a fixed lexicon
//! - unknown alphabetic words are tagged as nouns, or proper nouns when
//!   capitalized mid-sentence
//! - nouns are lemmatized with English plural rules
//!
//! This is good enough for shopping requests, where the content words are
//! overwhelmingly nouns and the rest is a small set of function words.

use unicode_segmentation::UnicodeSegmentation;

use super::{lemmatizer, lexicon};
use crate::domain::extraction::{AnalyzedToken, PartOfSpeech};
use crate::ports::LanguageAnalyzer;

/// Rule-based English analyzer.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn analyze_word(&self, segment: &str, sentence_start: bool) -> AnalyzedToken {
        let lower = strip_possessive(&segment.to_lowercase());

        let (pos, lemma) = match lexicon::lookup(&lower) {
            Some((pos, lemma)) => (pos, lemma.to_string()),
            None if is_numeric(&lower) => (PartOfSpeech::Numeral, lower.clone()),
            None if starts_uppercase(segment) && !sentence_start => {
                (PartOfSpeech::ProperNoun, lower.clone())
            }
            None => (PartOfSpeech::Noun, lemmatizer::noun_lemma(&lower)),
        };

        let token = AnalyzedToken::new(segment, lemma, pos);
        if lexicon::is_stop_word(&lower) {
            token.stop()
        } else {
            token
        }
    }
}

impl LanguageAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                tokens.push(AnalyzedToken::new(segment, segment, PartOfSpeech::Space));
                continue;
            }
            if !segment.chars().any(char::is_alphanumeric) {
                if segment.contains(['.', '!', '?']) {
                    sentence_start = true;
                }
                tokens.push(AnalyzedToken::new(segment, segment, PartOfSpeech::Punctuation));
                continue;
            }

            tokens.push(self.analyze_word(segment, sentence_start));
            sentence_start = false;
        }

        tokens
    }
}

/// Removes a trailing possessive `'s` (straight or curly apostrophe).
fn strip_possessive(word: &str) -> String {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(word)
        .to_string()
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
