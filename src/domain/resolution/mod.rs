//! Resolution domain module.
//!
//! Maps a query term to the shelf and category it belongs to. Resolution
//! is total: a miss produces the unknown sentinel rather than an error.

mod matcher;
mod result;

pub use matcher::{
    normalize_term, normalized_terms, resolve, resolve_all, resolve_with_tier, MatchTier, Resolution,
};
pub use result::{ResolutionResult, NOT_FOUND_SHELF, UNKNOWN_CATEGORY};
