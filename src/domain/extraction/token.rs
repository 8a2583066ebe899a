//! Analyzed token value objects.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag, modeled on the Universal POS tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Particle,
    Interjection,
    Punctuation,
    Space,
    Other,
}

impl PartOfSpeech {
    /// Returns true for common and proper nouns.
    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// One token as reported by a language analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Dictionary base form.
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
    pub is_space: bool,
}

impl AnalyzedToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_stop: false,
            is_space: pos == PartOfSpeech::Space,
        }
    }

    /// Marks the token as a stop word.
    pub fn stop(mut self) -> Self {
        self.is_stop = true;
        self
    }

    /// Returns true if the token can become a catalog query term.
    pub fn is_content_noun(&self) -> bool {
        self.pos.is_nominal()
            && !self.is_stop
            && !self.is_space
            && !self.text.trim().is_empty()
            && !self.lemma.trim().is_empty()
    }
}
