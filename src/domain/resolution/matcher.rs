//! Tiered term-to-location matcher.
//!
//! Resolution walks the whole catalog once per tier, highest precision
//! first, and stops at the first tier that produces a hit:
//!
//! 1. `Exact` - the term is a member of a category's item set
//! 2. `Substring` - the term contains a catalog item or vice versa
//! 3. `Plural` - the term and an item differ by a trailing `s`
//!
//! Within a tier the first category (and first item) in catalog order
//! wins. Everything here is a pure function of the term and the catalog.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::ResolutionResult;
use crate::domain::catalog::{Catalog, Category};

/// The tier that produced a resolution.
///
/// `Plural` never wins inside [`resolve_with_tier`]: a term and an item
/// that differ by a trailing `s` always contain one another, so the
/// `Substring` pass claims them first. The tier is tested on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Substring,
    Plural,
    /// No tier matched; the result is the unknown sentinel.
    Unmatched,
}

impl MatchTier {
    /// Tiers that search the catalog, in evaluation order.
    pub const SEARCH_ORDER: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Substring, MatchTier::Plural];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
            Self::Plural => "plural",
            Self::Unmatched => "unmatched",
        }
    }

    /// Returns true if `term` matches `category` under this tier.
    fn matches(&self, term: &str, category: &Category) -> bool {
        match self {
            Self::Exact => category.contains(term),
            Self::Substring => category
                .items()
                .iter()
                .any(|item| item.contains(term) || term.contains(item.as_str())),
            Self::Plural => category.items().iter().any(|item| is_plural_pair(term, item)),
            Self::Unmatched => false,
        }
    }
}

/// A resolution together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub result: ResolutionResult,
    pub tier: MatchTier,
}

/// `term + "s" == item` or `term == item + "s"`.
fn is_plural_pair(term: &str, item: &str) -> bool {
    term.strip_suffix('s') == Some(item) || item.strip_suffix('s') == Some(term)
}

/// Canonical form of a query term: trimmed and lowercased.
///
/// Resolution and session keys both use this form, so `" Milk"` and
/// `"milk"` are the same term.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Resolves a term to a location, reporting which tier matched.
///
/// The term is normalized first. A blank term is never searched for (it
/// would be a substring of every item) and resolves to the unknown
/// sentinel.
pub fn resolve_with_tier(term: &str, catalog: &Catalog) -> Resolution {
    let term = normalize_term(term);
    if term.is_empty() {
        return unmatched();
    }

    for tier in MatchTier::SEARCH_ORDER {
        if let Some(category) = catalog.iter().find(|category| tier.matches(&term, category)) {
            return Resolution {
                result: ResolutionResult::located(category.shelf(), category.name()),
                tier,
            };
        }
    }

    unmatched()
}

fn unmatched() -> Resolution {
    Resolution {
        result: ResolutionResult::unknown(),
        tier: MatchTier::Unmatched,
    }
}

/// Resolves a term to a location. Total: every input yields a result.
pub fn resolve(term: &str, catalog: &Catalog) -> ResolutionResult {
    resolve_with_tier(term, catalog).result
}

/// Resolves every term, keyed by its normalized form, in first-appearance
/// order. Spellings that normalize alike collapse into one entry; blank
/// terms are skipped.
pub fn resolve_all<I, S>(terms: I, catalog: &Catalog) -> IndexMap<String, ResolutionResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = IndexMap::new();
    for term in normalized_terms(terms) {
        let result = resolve(&term, catalog);
        results.insert(term, result);
    }
    results
}

/// Normalizes terms, dropping blanks and repeats, in first-appearance order.
pub fn normalized_terms<I, S>(terms: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| normalize_term(term.as_ref()))
        .filter(|term| !term.is_empty())
        .collect()
}
