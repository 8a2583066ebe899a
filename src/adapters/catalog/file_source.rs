//! File-backed catalog source.
//!
//! Reads a catalog document from disk. The format is picked from the file
//! extension: `.json` for JSON, `.yaml`/`.yml` for YAML. Both formats use
//! the same shape:
//!
//! ```json
//! {
//!   "fruits": { "shelf": "Aisle 3", "items": ["apple", "banana"] },
//!   "dairy":  { "shelf": "Aisle 1", "items": ["milk", "cheese"] }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::catalog::{Catalog, CatalogDocument, CatalogError};
use crate::ports::CatalogSource;

/// Supported catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detects the format from a path's extension.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for any other (or missing) extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CatalogError::UnsupportedFormat { extension }),
        }
    }

    /// Parses a document in this format.
    pub fn parse(&self, content: &str) -> Result<CatalogDocument, CatalogError> {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| CatalogError::malformed(format!("invalid JSON: {}", e))),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| CatalogError::malformed(format!("invalid YAML: {}", e))),
        }
    }
}

/// Loads the catalog from a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound {
                path: self.path.clone(),
            },
            _ => CatalogError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let catalog = Catalog::from_document(format.parse(&content)?)?;

        tracing::info!(
            path = %self.path.display(),
            categories = catalog.len(),
            items = catalog.item_count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
