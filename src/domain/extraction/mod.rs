//! Extraction domain module.
//!
//! Reduces an utterance to the noun lemmas worth looking up in the
//! catalog. Tokenization, tagging and lemmatization are delegated to a
//! `LanguageAnalyzer` port.

mod extractor;
mod token;

pub use extractor::TermExtractor;
pub use token::{AnalyzedToken, PartOfSpeech};
