//! Shopping list aggregate entity.
//!
//! A shopping list belongs to exactly one conversation session and
//! accumulates resolved items for its whole lifetime. It is owned by the
//! caller and mutated through `&mut self`; sharing one list across
//! sessions is not supported.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{CategoryGrouping, ListStats, MergeOutcome};
use crate::domain::foundation::SessionId;
use crate::domain::resolution::ResolutionResult;

/// Session shopping list - deduplicated term -> location mapping.
///
/// # Invariants
///
/// - At most one entry per term
/// - Re-adding a term overwrites its result in place, keeping its position
/// - Entries are only removed by [`ShoppingList::clear`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Session this list belongs to.
    session_id: SessionId,

    /// Entries in first-insertion order.
    entries: IndexMap<String, ResolutionResult>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new(SessionId::new())
    }
}

impl ShoppingList {
    /// Creates an empty list for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            entries: IndexMap::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the owning session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the result stored for a term.
    pub fn get(&self, term: &str) -> Option<&ResolutionResult> {
        self.entries.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolutionResult)> {
        self.entries.iter().map(|(term, result)| (term.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts or overwrites every entry of `results`.
    ///
    /// Merging the same results twice leaves the list unchanged the second
    /// time.
    pub fn merge<I>(&mut self, results: I) -> MergeOutcome
    where
        I: IntoIterator<Item = (String, ResolutionResult)>,
    {
        let mut outcome = MergeOutcome::default();
        for (term, result) in results {
            match self.entries.insert(term, result) {
                None => outcome.added += 1,
                Some(_) => outcome.refreshed += 1,
            }
        }
        outcome
    }

    /// Removes every entry. The session ID is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Computes statistics over the current entries.
    pub fn stats(&self) -> ListStats {
        let mut categories: Vec<&str> = self
            .entries
            .values()
            .filter(|result| !result.is_unknown())
            .map(|result| result.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();

        ListStats {
            total_items: self.entries.len(),
            category_count: categories.len(),
        }
    }

    /// Partitions every entry into its category bucket or the not-found bucket.
    ///
    /// Buckets and the items inside them follow first-insertion order.
    pub fn group_by_category(&self) -> CategoryGrouping {
        CategoryGrouping::from_results(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit(shelf: &str) -> ResolutionResult {
        ResolutionResult::located(shelf, "fruits")
    }

    fn entry(term: &str, result: ResolutionResult) -> (String, ResolutionResult) {
        (term.to_string(), result)
    }

    fn sample_list() -> ShoppingList {
        let mut list = ShoppingList::default();
        list.merge(vec![
            entry("apple", fruit("Aisle 3")),
            entry("milk", ResolutionResult::located("Aisle 1", "dairy")),
            entry("kryptonite", ResolutionResult::unknown()),
            entry("banana", fruit("Aisle 3")),
        ]);
        list
    }

    mod merge {
        use super::*;

        #[test]
        fn new_list_is_empty() {
            let list = ShoppingList::default();
            assert!(list.is_empty());
            assert_eq!(list.stats(), ListStats::default());
        }

        #[test]
        fn reports_added_and_refreshed_counts() {
            let mut list = ShoppingList::default();
            let first = list.merge(vec![entry("apple", fruit("Aisle 3"))]);
            let second = list.merge(vec![
                entry("apple", fruit("Aisle 3")),
                entry("pear", fruit("Aisle 3")),
            ]);

            assert_eq!(first, MergeOutcome { added: 1, refreshed: 0 });
            assert_eq!(second, MergeOutcome { added: 1, refreshed: 1 });
            assert_eq!(list.len(), 2);
        }

        #[test]
        fn merging_twice_is_idempotent() {
            let results = vec![entry("apple", fruit("Aisle 3")), entry("kryptonite", ResolutionResult::unknown())];
            let mut once = ShoppingList::default();
            once.merge(results.clone());
            let mut twice = once.clone();
            twice.merge(results);

            assert_eq!(once, twice);
        }

        #[test]
        fn overwrite_keeps_original_position() {
            let mut list = sample_list();
            list.merge(vec![entry("apple", fruit("Aisle 4"))]);

            let terms: Vec<&str> = list.iter().map(|(term, _)| term).collect();
            assert_eq!(terms, vec!["apple", "milk", "kryptonite", "banana"]);
            assert_eq!(list.get("apple").unwrap().shelf, "Aisle 4");
        }
    }

    mod stats {
        use super::*;

        #[test]
        fn counts_items_and_distinct_known_categories() {
            let stats = sample_list().stats();
            assert_eq!(stats.total_items, 4);
            assert_eq!(stats.category_count, 2);
        }

        #[test]
        fn unknown_category_is_excluded() {
            let mut list = ShoppingList::default();
            list.merge(vec![entry("kryptonite", ResolutionResult::unknown())]);
            assert_eq!(list.stats(), ListStats { total_items: 1, category_count: 0 });
        }
    }

    mod grouping {
        use super::*;

        #[test]
        fn partitions_known_and_not_found() {
            let grouping = sample_list().group_by_category();

            let fruits: Vec<&str> = grouping.categories["fruits"].iter().map(|g| g.item.as_str()).collect();
            assert_eq!(fruits, vec!["apple", "banana"]);
            assert_eq!(grouping.categories["dairy"][0].shelf, "Aisle 1");
            assert_eq!(grouping.not_found, vec!["kryptonite".to_string()]);
            assert_eq!(grouping.total_items(), 4);
        }

        #[test]
        fn category_buckets_follow_insertion_order() {
            let grouping = sample_list().group_by_category();
            let names: Vec<&str> = grouping.categories.keys().map(String::as_str).collect();
            assert_eq!(names, vec!["fruits", "dairy"]);
        }
    }

    #[test]
    fn clear_empties_list_but_keeps_session() {
        let mut list = sample_list();
        let session_id = *list.session_id();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.stats().total_items, 0);
        assert_eq!(list.session_id(), &session_id);
    }
}
