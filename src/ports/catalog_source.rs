//! CatalogSource port - Where the catalog comes from.
//!
//! The catalog is loaded once, before any session starts. A source that
//! cannot produce a catalog must say so with a `CatalogError` instead of
//! handing back an empty catalog, so callers can tell "the store is empty"
//! apart from "the catalog failed to load".

use crate::domain::catalog::{Catalog, CatalogError};

/// Port for loading the store catalog.
///
/// # Contract
///
/// Implementations must:
/// - Preserve category declaration order (it decides resolution tie-breaks)
/// - Return `CatalogError` for missing or unparseable input
/// - Only return an empty `Catalog` when the source is genuinely empty
pub trait CatalogSource: Send + Sync {
    /// Loads the full catalog.
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
