//! Catalog domain module.
//!
//! The catalog maps category names to a shelf label and a set of
//! canonical item names. It is loaded once by a `CatalogSource` and then
//! shared read-only by every session.

mod index;
mod errors;

pub use index::{Catalog, CatalogDocument, Category, CategoryRecord};
pub use errors::CatalogError;
