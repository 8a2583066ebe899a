//! Session domain module.
//!
//! Holds the per-conversation shopping list and the views derived from
//! it (statistics and category grouping). The list only ever grows until
//! it is explicitly cleared.

mod aggregate;
mod views;

pub use aggregate::ShoppingList;
pub use views::{CategoryGrouping, GroupedItem, ListStats, MergeOutcome};
