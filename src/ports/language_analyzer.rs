//! LanguageAnalyzer port - Tokenization, tagging and lemmatization.
//!
//! Term extraction needs to know, for every token of an utterance, its
//! base form, its part of speech and whether it is a stop word. Any NLP
//! backend that can answer those questions can sit behind this trait.

use crate::domain::extraction::AnalyzedToken;

/// Port for linguistic analysis of utterance text.
///
/// # Contract
///
/// Implementations must:
/// - Return tokens in input order
/// - Never fail: unknown words still produce a token (tagged as best they can)
/// - Report whitespace tokens with `is_space` set, or omit them
///
/// # Usage
///
/// ```rust,ignore
/// let analyzer: Arc<dyn LanguageAnalyzer> = Arc::new(LexiconAnalyzer::english());
/// for token in analyzer.analyze("i need apples") {
///     println!("{} -> {} ({:?})", token.text, token.lemma, token.pos);
/// }
/// ```
pub trait LanguageAnalyzer: Send + Sync {
    /// Splits `text` into analyzed tokens.
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn LanguageAnalyzer) {}
}
