//! Resolution result value object.

use serde::{Deserialize, Serialize};

/// Category reported for terms that match nothing in the catalog.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Shelf reported for terms that match nothing in the catalog.
pub const NOT_FOUND_SHELF: &str = "Not found in store";

/// Where a term lives in the store.
///
/// A miss is represented by the sentinel from [`ResolutionResult::unknown`],
/// never by an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub shelf: String,
    pub category: String,
}

impl ResolutionResult {
    /// Creates a located result.
    pub fn located(shelf: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            shelf: shelf.into(),
            category: category.into(),
        }
    }

    /// The "not found" sentinel.
    pub fn unknown() -> Self {
        Self::located(NOT_FOUND_SHELF, UNKNOWN_CATEGORY)
    }

    /// Returns true if this is the "not found" sentinel.
    pub fn is_unknown(&self) -> bool {
        self.category == UNKNOWN_CATEGORY
    }
}
