//! Property tests for resolution and session aggregation.

use indexmap::IndexMap;
use proptest::prelude::*;

use shelf_finder::domain::catalog::{Catalog, Category};
use shelf_finder::domain::resolution::{resolve, resolve_all, resolve_with_tier, MatchTier, ResolutionResult};
use shelf_finder::domain::session::ShoppingList;

fn store() -> Catalog {
    Catalog::new(vec![
        Category::new("fruits", "Aisle 3", ["apple", "banana", "orange"]).unwrap(),
        Category::new("dairy", "Aisle 1", ["milk", "eggs", "cheese"]).unwrap(),
        Category::new("bakery", "Aisle 2", ["bread", "apple pie"]).unwrap(),
        Category::new("snacks", "Aisle 7", ["chips", "chocolate bar"]).unwrap(),
    ])
    .unwrap()
}

fn term() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("apple".to_string()),
        Just("eggs".to_string()),
        Just("egg".to_string()),
        Just("pie".to_string()),
        Just("chocolate".to_string()),
        Just("kryptonite".to_string()),
        "[a-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn resolution_is_total(input in any::<String>()) {
        let result = resolve(&input, &store());
        prop_assert!(!result.shelf.is_empty());
        prop_assert!(!result.category.is_empty());
    }

    #[test]
    fn resolution_is_deterministic(input in term()) {
        let catalog = store();
        prop_assert_eq!(resolve_with_tier(&input, &catalog), resolve_with_tier(&input, &catalog));
    }

    #[test]
    fn unmatched_tier_always_yields_sentinel(input in term()) {
        let resolution = resolve_with_tier(&input, &store());
        prop_assert_eq!(
            resolution.tier == MatchTier::Unmatched,
            resolution.result == ResolutionResult::unknown()
        );
    }

    #[test]
    fn merge_is_idempotent(terms in prop::collection::vec(term(), 0..8)) {
        let catalog = store();
        let results = resolve_all(&terms, &catalog);

        let mut once = ShoppingList::default();
        once.merge(results.clone());
        let mut twice = once.clone();
        let outcome = twice.merge(results.clone());

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(outcome.added, 0);
        prop_assert_eq!(outcome.refreshed, results.len());
    }

    #[test]
    fn grouping_partitions_every_entry(turns in prop::collection::vec(prop::collection::vec(term(), 0..5), 0..5)) {
        let catalog = store();
        let mut list = ShoppingList::default();
        for turn in &turns {
            list.merge(resolve_all(turn, &catalog));
        }

        let grouping = list.group_by_category();
        prop_assert_eq!(grouping.total_items(), list.len());

        let mut seen: IndexMap<String, usize> = IndexMap::new();
        for items in grouping.categories.values() {
            for grouped in items {
                *seen.entry(grouped.item.clone()).or_default() += 1;
            }
        }
        for item in &grouping.not_found {
            *seen.entry(item.clone()).or_default() += 1;
            prop_assert!(list.get(item).unwrap().is_unknown());
        }
        prop_assert!(seen.values().all(|count| *count == 1));
        prop_assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn category_count_ignores_unknown(turns in prop::collection::vec(term(), 0..10)) {
        let catalog = store();
        let mut list = ShoppingList::default();
        list.merge(resolve_all(&turns, &catalog));

        let stats = list.stats();
        let grouping = list.group_by_category();
        prop_assert_eq!(stats.category_count, grouping.categories.len());
        prop_assert_eq!(stats.total_items, list.len());
    }
}

#[test]
fn exact_match_outranks_substring_in_earlier_category() {
    // "apple pie" in bakery contains "apple", but fruits holds "apple" exactly.
    let resolution = resolve_with_tier("apple", &store());
    assert_eq!(resolution.tier, MatchTier::Exact);
    assert_eq!(resolution.result.category, "fruits");
}
