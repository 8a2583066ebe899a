//! ShoppingListExporter port - Writing a session list out of the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::ShoppingList;

/// Errors that can occur while exporting a list.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Shopping list is empty, nothing to export")]
    EmptyList,

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::EmptyList => ErrorCode::NothingToExport,
            ExportError::Io { .. } => ErrorCode::ExportFailed,
        }
    }
}

impl From<&ExportError> for DomainError {
    fn from(err: &ExportError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            ExportError::Io { path, .. } => domain.with_detail("path", path.display().to_string()),
            ExportError::EmptyList => domain,
        }
    }
}

/// Where an exported list ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedList {
    pub path: PathBuf,
    pub item_count: usize,
}

/// Port for exporting a shopping list.
///
/// # Contract
///
/// Implementations must:
/// - Refuse empty lists with `ExportError::EmptyList`
/// - Not leave a partially written file behind on failure
pub trait ShoppingListExporter: Send + Sync {
    fn export(&self, list: &ShoppingList) -> Result<ExportedList, ExportError>;
}
