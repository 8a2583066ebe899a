//! Plain-text file exporter.
//!
//! Writes the session list as a printable text file named
//! `SmartList_YYYYMMDD_HHMMSS.txt` inside the configured directory.
//!
//! # Layout
//!
//! ```text
//! SMART SUPERMARKET SHOPPING LIST
//! ============================================================
//! Generated: 2024-05-01 at 14:03:22
//! Total Items: 3
//! ============================================================
//!
//! FRUITS SECTION:
//! ----------------------------------------
//!   [x] Apple                     -> Aisle 3
//!
//! ITEMS NOT AVAILABLE:
//! ----------------------------------------
//!   - Kryptonite
//!
//! ============================================================
//! Tip: Follow the shelf order for efficient shopping!
//! ```
//!
//! # Atomic Writes
//!
//! Content goes to `<name>.tmp` first and is renamed into place, so a
//! failed export never leaves a truncated list behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::domain::session::ShoppingList;
use crate::ports::{ExportError, ExportedList, ShoppingListExporter};

const RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 40;
const ITEM_COLUMN_WIDTH: usize = 25;

/// Exports shopping lists as text files.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    output_dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name for an export generated at `at`.
    pub fn file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("SmartList_{}.txt", at.format("%Y%m%d_%H%M%S"))
    }

    /// Writes `content` to `path` through a temp file and rename.
    fn write_atomic(path: &Path, content: &str) -> Result<(), ExportError> {
        let temp_path = path.with_extension("txt.tmp");

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExportError::io(path, e)
        })
    }
}

impl ShoppingListExporter for TextFileExporter {
    fn export(&self, list: &ShoppingList) -> Result<ExportedList, ExportError> {
        if list.is_empty() {
            return Err(ExportError::EmptyList);
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::io(&self.output_dir, e))?;

        let now = Local::now();
        let path = self.output_dir.join(Self::file_name(&now));
        Self::write_atomic(&path, &render_shopping_list(list, &now))?;

        tracing::info!(
            session_id = %list.session_id(),
            path = %path.display(),
            items = list.len(),
            "Shopping list exported"
        );

        Ok(ExportedList {
            path,
            item_count: list.len(),
        })
    }
}

/// Turns `fresh_produce` into `Fresh Produce`.
pub fn display_category(category: &str) -> String {
    category
        .replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders the export document for `list`.
pub fn render_shopping_list<Tz: TimeZone>(list: &ShoppingList, generated_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let grouping = list.group_by_category().sorted();
    let rule = "=".repeat(RULE_WIDTH);
    let section_rule = "-".repeat(SECTION_RULE_WIDTH);

    let mut lines = vec![
        "SMART SUPERMARKET SHOPPING LIST".to_string(),
        rule.clone(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d at %H:%M:%S")),
        format!("Total Items: {}", list.len()),
        rule.clone(),
        String::new(),
    ];

    for (category, items) in &grouping.categories {
        lines.push(format!("{} SECTION:", display_category(category).to_uppercase()));
        lines.push(section_rule.clone());
        for entry in items {
            lines.push(format!(
                "  [x] {:<width$} -> {}",
                capitalize(&entry.item),
                entry.shelf,
                width = ITEM_COLUMN_WIDTH
            ));
        }
        lines.push(String::new());
    }

    if !grouping.not_found.is_empty() {
        lines.push("ITEMS NOT AVAILABLE:".to_string());
        lines.push(section_rule);
        for item in &grouping.not_found {
            lines.push(format!("  - {}", capitalize(item)));
        }
        lines.push(String::new());
    }

    lines.push(rule);
    lines.push("Tip: Follow the shelf order for efficient shopping!".to_string());
    lines.push("Happy Shopping!".to_string());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}
