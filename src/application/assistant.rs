//! ShoppingAssistant - the caller-facing surface of the engine.
//!
//! One assistant serves one conversation session. The catalog is shared
//! read-only (`Arc`) so any number of assistants can run side by side;
//! each owns its own shopping list.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use super::AssistantReply;
use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::extraction::TermExtractor;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::intent::{Intent, IntentClassifier};
use crate::domain::resolution::{normalized_terms, resolve_with_tier, ResolutionResult};
use crate::domain::session::{CategoryGrouping, ListStats, MergeOutcome, ShoppingList};
use crate::ports::{CatalogSource, ExportError, ExportedList, LanguageAnalyzer, ShoppingListExporter};

/// Classifies, extracts, resolves and aggregates for one session.
#[derive(Debug, Clone)]
pub struct ShoppingAssistant {
    catalog: Arc<Catalog>,
    classifier: IntentClassifier,
    extractor: TermExtractor,
    session: ShoppingList,
}

impl ShoppingAssistant {
    /// Creates an assistant with a fresh session.
    pub fn new(catalog: Arc<Catalog>, analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self::for_session(SessionId::new(), catalog, analyzer)
    }

    /// Creates an assistant for an existing session ID.
    pub fn for_session(
        session_id: SessionId,
        catalog: Arc<Catalog>,
        analyzer: Arc<dyn LanguageAnalyzer>,
    ) -> Self {
        Self {
            catalog,
            classifier: IntentClassifier::new(),
            extractor: TermExtractor::new(analyzer),
            session: ShoppingList::new(session_id),
        }
    }

    /// Loads the catalog from `source` and creates an assistant over it.
    ///
    /// # Errors
    ///
    /// Returns the source's `CatalogError`; no session can start without
    /// a catalog.
    pub fn from_source(
        source: &dyn CatalogSource,
        analyzer: Arc<dyn LanguageAnalyzer>,
    ) -> Result<Self, CatalogError> {
        let catalog = source.load().map_err(|e| {
            let report = DomainError::from(&e);
            tracing::error!(
                source = %source.describe(),
                code = %report.code,
                details = ?report.details,
                error = %report.message,
                "Catalog unavailable"
            );
            e
        })?;
        Ok(Self::new(Arc::new(catalog), analyzer))
    }

    /// Replaces the intent classifier.
    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the shared catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns the session shopping list.
    pub fn session(&self) -> &ShoppingList {
        &self.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Core operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn classify_intent(&self, text: &str) -> Intent {
        self.classifier.classify(text)
    }

    pub fn extract_terms(&self, text: &str) -> IndexSet<String> {
        self.extractor.extract(text)
    }

    /// Resolves one term against the catalog. Never fails.
    pub fn resolve(&self, term: &str) -> ResolutionResult {
        let resolution = resolve_with_tier(term, &self.catalog);
        debug!(
            term,
            tier = resolution.tier.label(),
            category = %resolution.result.category,
            "Term resolved"
        );
        resolution.result
    }

    /// Resolves every term, keyed by its normalized form, in first
    /// appearance order. Blank terms are skipped.
    pub fn resolve_terms<I, S>(&self, terms: I) -> IndexMap<String, ResolutionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalized_terms(terms)
            .into_iter()
            .map(|term| {
                let result = self.resolve(&term);
                (term, result)
            })
            .collect()
    }

    pub fn merge_into_session(&mut self, results: IndexMap<String, ResolutionResult>) -> MergeOutcome {
        self.session.merge(results)
    }

    pub fn session_stats(&self) -> ListStats {
        self.session.stats()
    }

    pub fn group_session_by_category(&self) -> CategoryGrouping {
        self.session.group_by_category()
    }

    /// Empties the session list. Callers confirm with the user first.
    pub fn clear_session(&mut self) {
        let removed = self.session.len();
        self.session.clear();
        info!(session_id = %self.session.session_id(), removed, "Session cleared");
    }

    /// Exports the session list through `exporter`.
    pub fn export_session(&self, exporter: &dyn ShoppingListExporter) -> Result<ExportedList, ExportError> {
        exporter.export(&self.session).map_err(|e| {
            let report = DomainError::from(&e);
            warn!(
                session_id = %self.session.session_id(),
                code = %report.code,
                details = ?report.details,
                error = %report.message,
                "Export failed"
            );
            e
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversation flow
    // ─────────────────────────────────────────────────────────────────────────

    /// Handles one utterance end to end.
    ///
    /// # Steps
    /// 1. Ignore blank input
    /// 2. Classify; greetings and farewells stop here
    /// 3. Extract terms; none means the user must clarify
    /// 4. Resolve each term and merge the results into the session
    pub fn handle(&mut self, utterance: &str) -> AssistantReply {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return AssistantReply::Ignored;
        }

        // 1. Classify
        let intent = self.classify_intent(utterance);
        debug!(session_id = %self.session.session_id(), ?intent, "Utterance classified");
        match intent {
            Intent::Greeting => return AssistantReply::Greeting,
            Intent::Farewell => return AssistantReply::Farewell,
            Intent::ItemRequest => {}
        }

        // 2. Extract
        let terms = self.extract_terms(utterance);
        if terms.is_empty() {
            debug!(session_id = %self.session.session_id(), "No items detected");
            return AssistantReply::NeedsClarification;
        }

        // 3. Resolve
        let results = self.resolve_terms(&terms);
        let unresolved = results.values().filter(|r| r.is_unknown()).count();
        if unresolved > 0 {
            info!(session_id = %self.session.session_id(), unresolved, "Some items not in catalog");
        }

        // 4. Merge
        let outcome = self.merge_into_session(results.clone());
        let stats = self.session_stats();
        info!(
            session_id = %self.session.session_id(),
            added = outcome.added,
            refreshed = outcome.refreshed,
            total_items = stats.total_items,
            "Session list updated"
        );

        AssistantReply::Located {
            results,
            outcome,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::nlp::LexiconAnalyzer;
    use crate::domain::catalog::Category;
    use crate::domain::resolution::NOT_FOUND_SHELF;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                Category::new("fruits", "Aisle 3", ["apple", "banana"]).unwrap(),
                Category::new("dairy", "Aisle 1", ["milk", "eggs", "cheese"]).unwrap(),
                Category::new("bakery", "Aisle 2", ["bread", "bagel"]).unwrap(),
            ])
            .unwrap(),
        )
    }

    fn assistant() -> ShoppingAssistant {
        ShoppingAssistant::new(catalog(), Arc::new(LexiconAnalyzer::new()))
    }

    mod handle {
        use super::*;

        #[test]
        fn item_request_resolves_and_merges() {
            let mut assistant = assistant();
            let reply = assistant.handle("I need apples and bananas");

            match reply {
                AssistantReply::Located { results, outcome, stats } => {
                    let keys: Vec<&str> = results.keys().map(String::as_str).collect();
                    assert_eq!(keys, vec!["apple", "banana"]);
                    for result in results.values() {
                        assert_eq!(result, &ResolutionResult::located("Aisle 3", "fruits"));
                    }
                    assert_eq!(outcome.added, 2);
                    assert_eq!(stats, ListStats { total_items: 2, category_count: 1 });
                }
                other => panic!("expected Located, got {:?}", other),
            }
        }

        #[test]
        fn farewell_skips_lookup() {
            let mut assistant = assistant();
            assert_eq!(assistant.handle("thanks, bye"), AssistantReply::Farewell);
            assert!(assistant.session().is_empty());
        }

        #[test]
        fn greeting_skips_lookup() {
            let mut assistant = assistant();
            assert_eq!(assistant.handle("Hello!"), AssistantReply::Greeting);
            assert!(assistant.session().is_empty());
        }

        #[test]
        fn no_items_asks_for_clarification() {
            let mut assistant = assistant();
            assert_eq!(
                assistant.handle("can you help me with that"),
                AssistantReply::NeedsClarification
            );
        }

        #[test]
        fn blank_input_is_ignored() {
            assert_eq!(assistant().handle("   "), AssistantReply::Ignored);
        }

        #[test]
        fn unknown_items_are_carried_as_sentinel() {
            let mut assistant = assistant();
            let reply = assistant.handle("do you have kryptonite");

            assert_eq!(reply.unresolved(), vec!["kryptonite"]);
            assert_eq!(assistant.session().get("kryptonite").unwrap().shelf, NOT_FOUND_SHELF);
            assert_eq!(assistant.session_stats().category_count, 0);
        }

        #[test]
        fn repeated_requests_do_not_duplicate() {
            let mut assistant = assistant();
            assistant.handle("milk and bread");
            let reply = assistant.handle("more milk please");

            match reply {
                AssistantReply::Located { outcome, stats, .. } => {
                    assert_eq!(outcome, MergeOutcome { added: 0, refreshed: 1 });
                    assert_eq!(stats.total_items, 2);
                }
                other => panic!("expected Located, got {:?}", other),
            }
        }
    }

    mod operations {
        use super::*;

        #[test]
        fn groups_and_clears_session() {
            let mut assistant = assistant();
            assistant.handle("eggs, bagels and kryptonite");

            let grouping = assistant.group_session_by_category();
            assert_eq!(grouping.categories["dairy"][0].item, "egg");
            assert_eq!(grouping.categories["bakery"][0].item, "bagel");
            assert_eq!(grouping.not_found, vec!["kryptonite".to_string()]);

            assistant.clear_session();
            assert_eq!(assistant.session_stats(), ListStats::default());
        }

        #[test]
        fn sessions_share_catalog_but_not_lists() {
            let catalog = catalog();
            let analyzer: Arc<dyn LanguageAnalyzer> = Arc::new(LexiconAnalyzer::new());
            let mut first = ShoppingAssistant::new(catalog.clone(), analyzer.clone());
            let second = ShoppingAssistant::new(catalog, analyzer);

            first.handle("milk");
            assert_eq!(first.session_stats().total_items, 1);
            assert!(second.session().is_empty());
            assert_ne!(first.session().session_id(), second.session().session_id());
        }

        #[test]
        fn spellings_of_one_item_share_a_list_entry() {
            let mut assistant = assistant();
            let results = assistant.resolve_terms(["Milk", "milk", " milk"]);
            assistant.merge_into_session(results);

            assert_eq!(assistant.session_stats().total_items, 1);
            assert!(assistant.session().contains("milk"));
            assert!(!assistant.session().contains("Milk"));
        }

        #[test]
        fn blank_terms_are_not_added() {
            let mut assistant = assistant();
            let results = assistant.resolve_terms(["", "   "]);
            assert!(results.is_empty());
            assistant.merge_into_session(results);
            assert!(assistant.session().is_empty());
        }

        #[test]
        fn custom_classifier_is_used() {
            let mut assistant =
                assistant().with_classifier(IntentClassifier::with_phrases(&["cheers"], &["yo"]));
            assert_eq!(assistant.handle("cheers"), AssistantReply::Farewell);
        }
    }
}
