//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `nlp` - Lexicon-based English analyzer
//! - `catalog` - Catalog sources (JSON/YAML file, in-memory)
//! - `export` - Shopping list exporters (text file)
//! - `console` - Terminal rendering of replies and lists

pub mod catalog;
pub mod console;
pub mod export;
pub mod nlp;

pub use catalog::{FileCatalogSource, InMemoryCatalogSource};
pub use export::TextFileExporter;
pub use nlp::LexiconAnalyzer;
