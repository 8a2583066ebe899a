//! Export adapters - Implementations of the `ShoppingListExporter` port.
//!
//! - `TextFileExporter` - printable plain-text file

mod text_file;

pub use text_file::{capitalize, display_category, render_shopping_list, TextFileExporter};
