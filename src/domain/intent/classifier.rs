//! Phrase-based utterance intent classification.

use serde::{Deserialize, Serialize};

/// Phrases that mark an utterance as gratitude or a farewell.
pub const FAREWELL_PHRASES: &[&str] = &[
    "thank you",
    "thanks",
    "thank u",
    "thx",
    "appreciate",
    "grateful",
    "bye",
    "goodbye",
];

/// Phrases that mark an utterance as a greeting.
pub const GREETING_PHRASES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "howdy",
];

/// What the user is trying to do with an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Opening pleasantry; no lookup is performed.
    Greeting,
    /// Gratitude or goodbye; no lookup is performed.
    Farewell,
    /// Anything else; the utterance is searched for items.
    ItemRequest,
}

impl Intent {
    /// Returns true if item extraction should run for this intent.
    pub fn requires_lookup(&self) -> bool {
        matches!(self, Self::ItemRequest)
    }
}

/// Classifies utterances by phrase membership.
///
/// Phrases match on whole words of the lowercased utterance, so "hi" is
/// found in "hi there" but not in "chips". Farewell phrases are checked
/// before greeting phrases: "hi, thanks!" is a farewell.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    farewell_phrases: Vec<String>,
    greeting_phrases: Vec<String>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Creates a classifier with the built-in phrase sets.
    pub fn new() -> Self {
        Self::with_phrases(FAREWELL_PHRASES, GREETING_PHRASES)
    }

    /// Creates a classifier with custom phrase sets.
    pub fn with_phrases<S: AsRef<str>>(farewell: &[S], greeting: &[S]) -> Self {
        Self {
            farewell_phrases: normalize_phrases(farewell),
            greeting_phrases: normalize_phrases(greeting),
        }
    }

    /// Classifies an utterance.
    pub fn classify(&self, text: &str) -> Intent {
        let padded = padded_words(text);
        if padded.trim().is_empty() {
            return Intent::ItemRequest;
        }

        if contains_any(&padded, &self.farewell_phrases) {
            Intent::Farewell
        } else if contains_any(&padded, &self.greeting_phrases) {
            Intent::Greeting
        } else {
            Intent::ItemRequest
        }
    }
}

/// Lowercases `text` and rewrites it as ` word word ... ` with every
/// non-alphanumeric run collapsed to a single space.
fn padded_words(text: &str) -> String {
    let words: Vec<String> = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    format!(" {} ", words.join(" "))
}

fn normalize_phrases<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    phrases
        .iter()
        .map(|p| padded_words(p.as_ref()))
        .filter(|p| !p.trim().is_empty())
        .collect()
}

fn contains_any(padded_text: &str, padded_phrases: &[String]) -> bool {
    padded_phrases.iter().any(|phrase| padded_text.contains(phrase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod classification {
        use super::*;

        #[test]
        fn greeting_phrases_classify_as_greeting() {
            let classifier = IntentClassifier::new();
            for text in ["Hi!", "hello there", "Good morning, assistant", "HOWDY"] {
                assert_eq!(classifier.classify(text), Intent::Greeting, "{}", text);
            }
        }

        #[test]
        fn gratitude_and_farewell_classify_as_farewell() {
            let classifier = IntentClassifier::new();
            for text in ["thanks, bye", "Thank you so much", "ok goodbye", "thx"] {
                assert_eq!(classifier.classify(text), Intent::Farewell, "{}", text);
            }
        }

        #[test]
        fn farewell_takes_priority_over_greeting() {
            assert_eq!(IntentClassifier::new().classify("hi, thanks!"), Intent::Farewell);
        }

        #[test]
        fn everything_else_is_an_item_request() {
            let classifier = IntentClassifier::new();
            assert_eq!(classifier.classify("I need apples and bananas"), Intent::ItemRequest);
            assert_eq!(classifier.classify(""), Intent::ItemRequest);
        }

        #[test]
        fn phrases_do_not_match_inside_words() {
            let classifier = IntentClassifier::new();
            assert_eq!(classifier.classify("where are the chips"), Intent::ItemRequest);
            assert_eq!(classifier.classify("whey protein"), Intent::ItemRequest);
            assert_eq!(classifier.classify("this"), Intent::ItemRequest);
        }

        #[test]
        fn farewell_words_inside_item_names_are_requests() {
            let classifier = IntentClassifier::new();
            assert_eq!(classifier.classify("thanksgiving turkey"), Intent::ItemRequest);
            assert_eq!(classifier.classify("a bye-bye card"), Intent::Farewell);
        }

        #[test]
        fn multi_word_phrases_tolerate_punctuation_and_spacing() {
            assert_eq!(
                IntentClassifier::new().classify("thank,   you!"),
                Intent::Farewell
            );
        }
    }

    mod custom_phrases {
        use super::*;

        #[test]
        fn custom_phrase_sets_are_used() {
            let classifier = IntentClassifier::with_phrases(&["cheers"], &["yo"]);
            assert_eq!(classifier.classify("cheers mate"), Intent::Farewell);
            assert_eq!(classifier.classify("yo"), Intent::Greeting);
            assert_eq!(classifier.classify("hello"), Intent::ItemRequest);
        }

        #[test]
        fn blank_phrases_are_ignored() {
            let classifier = IntentClassifier::with_phrases(&["", "  "], &["hey"]);
            assert_eq!(classifier.classify("milk"), Intent::ItemRequest);
        }
    }

    #[test]
    fn only_item_requests_require_lookup() {
        assert!(Intent::ItemRequest.requires_lookup());
        assert!(!Intent::Greeting.requires_lookup());
        assert!(!Intent::Farewell.requires_lookup());
    }

    #[test]
    fn intent_serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&Intent::ItemRequest).unwrap(), "\"item_request\"");
    }
}
