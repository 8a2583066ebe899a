//! Catalog adapters - Implementations of the `CatalogSource` port.
//!
//! - `FileCatalogSource` - JSON or YAML catalog document on disk
//! - `InMemoryCatalogSource` - catalog built in code

mod file_source;
mod in_memory;

pub use file_source::{CatalogFormat, FileCatalogSource};
pub use in_memory::InMemoryCatalogSource;
