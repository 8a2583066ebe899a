//! Read models derived from a shopping list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::resolution::ResolutionResult;

/// Statistics over a shopping list, recomputed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStats {
    /// Number of list entries.
    pub total_items: usize,
    /// Distinct categories among entries, excluding the unknown sentinel.
    pub category_count: usize,
}

/// Counts produced by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Terms that were not in the list before.
    pub added: usize,
    /// Terms that were already present and got overwritten.
    pub refreshed: usize,
}

/// An item inside a category bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupedItem {
    pub item: String,
    pub shelf: String,
}

/// A shopping list partitioned by category.
///
/// Every list entry lands in exactly one place: a known category bucket
/// or `not_found`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGrouping {
    pub categories: IndexMap<String, Vec<GroupedItem>>,
    pub not_found: Vec<String>,
}

impl CategoryGrouping {
    /// Partitions resolved terms into category buckets and the not-found
    /// bucket. Buckets and the items inside them follow input order.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a ResolutionResult)>,
    {
        let mut grouping = Self::default();
        for (term, result) in results {
            if result.is_unknown() {
                grouping.not_found.push(term.to_string());
            } else {
                grouping
                    .categories
                    .entry(result.category.clone())
                    .or_default()
                    .push(GroupedItem {
                        item: term.to_string(),
                        shelf: result.shelf.clone(),
                    });
            }
        }
        grouping
    }

    /// Total entries across all buckets.
    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum::<usize>() + self.not_found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.not_found.is_empty()
    }

    /// Returns the grouping with categories sorted by name, items sorted
    /// within each category, and not-found items sorted.
    pub fn sorted(mut self) -> Self {
        self.categories.sort_keys();
        for items in self.categories.values_mut() {
            items.sort();
        }
        self.not_found.sort();
        self
    }
}
