//! Catalog configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

const SUPPORTED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Where the product catalog is loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog document (JSON or YAML)
    #[serde(default = "default_path")]
    pub path: String,
}

impl CatalogConfig {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }

        let extension = self
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ValidationError::UnsupportedCatalogFormat(extension));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}

fn default_path() -> String {
    "products.json".to_string()
}
