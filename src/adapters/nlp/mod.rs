//! NLP adapters - Implementations of the `LanguageAnalyzer` port.
//!
//! - `LexiconAnalyzer` - built-in rule-based English analyzer

mod lemmatizer;
mod lexicon;
mod lexicon_analyzer;

pub use lemmatizer::noun_lemma;
pub use lexicon_analyzer::LexiconAnalyzer;
