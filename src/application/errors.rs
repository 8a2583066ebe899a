//! Application-level errors.

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::domain::catalog::CatalogError;

/// Failures that stop the assistant from starting or running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(ConfigError::ValidationFailed(err))
    }
}
