//! Query term extraction from free-form utterances.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::ports::LanguageAnalyzer;

/// Turns utterance text into candidate catalog query terms.
///
/// A token becomes a term when it is a common or proper noun, is not a
/// stop word and is not whitespace. The term is the token's lowercase
/// lemma, so "apples" and "apple" collapse to one entry.
#[derive(Clone)]
pub struct TermExtractor {
    analyzer: Arc<dyn LanguageAnalyzer>,
}

impl TermExtractor {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Extracts the set of query terms, in order of first appearance.
    ///
    /// An empty set means no item was mentioned; it is not an error.
    pub fn extract(&self, text: &str) -> IndexSet<String> {
        let normalized = text.to_lowercase();
        self.analyzer
            .analyze(&normalized)
            .into_iter()
            .filter(|token| token.is_content_noun())
            .map(|token| token.lemma.trim().to_lowercase())
            .collect()
    }
}

impl std::fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermExtractor").finish_non_exhaustive()
    }
}
