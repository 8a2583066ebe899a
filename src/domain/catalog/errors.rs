//! Catalog loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons the catalog could not be made available.
///
/// Every variant means "catalog unavailable" to callers; an empty but
/// well-formed catalog is not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog document is malformed: {reason}")]
    Malformed { reason: String },

    #[error("Unsupported catalog format '{extension}' (expected json, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("Invalid category '{category}': {reason}")]
    InvalidCategory { category: String, reason: String },
}

impl CatalogError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CatalogError::Malformed {
            reason: reason.into(),
        }
    }

    pub fn invalid_category(category: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidCategory {
            category: category.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::CatalogUnavailable
    }
}

impl From<&CatalogError> for DomainError {
    fn from(err: &CatalogError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            CatalogError::NotFound { path } | CatalogError::Io { path, .. } => {
                domain.with_detail("path", path.display().to_string())
            }
            CatalogError::InvalidCategory { category, .. } => {
                domain.with_detail("category", category.clone())
            }
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_path() {
        let err = CatalogError::NotFound {
            path: PathBuf::from("products.json"),
        };
        assert_eq!(err.to_string(), "Catalog file not found: products.json");
    }

    #[test]
    fn every_variant_maps_to_catalog_unavailable() {
        let errors = [
            CatalogError::malformed("bad json"),
            CatalogError::invalid_category("", "empty name"),
            CatalogError::UnsupportedFormat {
                extension: "csv".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.code(), ErrorCode::CatalogUnavailable);
        }
    }

    #[test]
    fn converts_to_domain_error_with_category_detail() {
        let err = DomainError::from(&CatalogError::invalid_category("unknown", "reserved"));
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(err.details.get("category"), Some(&"unknown".to_string()));
    }
}
