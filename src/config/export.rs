//! Export configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where exported shopping lists are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl ExportConfig {
    pub fn directory(&self) -> &Path {
        Path::new(&self.directory)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.directory"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "shopping_lists".to_string()
}
