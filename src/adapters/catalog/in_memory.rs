//! In-memory catalog source for tests and embedding.

use crate::domain::catalog::{Catalog, CatalogError};
use crate::ports::CatalogSource;

/// Serves a catalog that was built in code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    catalog: Catalog,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} categories)", self.catalog.len())
    }
}
