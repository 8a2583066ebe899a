//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LanguageAnalyzer` - Tokenization, POS tagging, lemmatization
//! - `CatalogSource` - Loading the store catalog
//! - `ShoppingListExporter` - Writing a session list out

mod catalog_source;
mod language_analyzer;
mod list_exporter;

pub use catalog_source::CatalogSource;
pub use language_analyzer::LanguageAnalyzer;
pub use list_exporter::{ExportError, ExportedList, ShoppingListExporter};
