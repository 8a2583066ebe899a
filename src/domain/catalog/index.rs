//! Catalog index - categories, their shelves and item sets.
//!
//! The catalog is built once and never mutated. Category order is the
//! declaration order of the source document and item order within a
//! category is preserved as well, so every lookup that walks the catalog
//! visits entries in the same sequence.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::domain::resolution::UNKNOWN_CATEGORY;

/// Raw category entry as it appears in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub shelf: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Catalog document: category name -> record, in declaration order.
pub type CatalogDocument = IndexMap<String, CategoryRecord>;

/// A single catalog category.
///
/// # Invariants
///
/// - `name` and `shelf` are non-empty after trimming
/// - `name` is not the reserved `unknown` sentinel
/// - `items` are trimmed, lowercase and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    shelf: String,
    items: IndexSet<String>,
}

impl Category {
    /// Creates a category, normalizing its items.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if the name or shelf is blank, or the name is reserved
    pub fn new<I, S>(name: impl Into<String>, shelf: impl Into<String>, items: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        let shelf = shelf.into().trim().to_string();

        if name.is_empty() {
            return Err(CatalogError::invalid_category(name, "category name cannot be empty"));
        }
        if name.eq_ignore_ascii_case(UNKNOWN_CATEGORY) {
            return Err(CatalogError::invalid_category(
                name,
                "name is reserved for unresolved items",
            ));
        }
        if shelf.is_empty() {
            return Err(CatalogError::invalid_category(name, "shelf cannot be empty"));
        }

        let items = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .collect();

        Ok(Self { name, shelf, items })
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shelf label.
    pub fn shelf(&self) -> &str {
        &self.shelf
    }

    /// Returns the item set in declaration order.
    pub fn items(&self) -> &IndexSet<String> {
        &self.items
    }

    /// Returns true if `item` is an exact member of this category.
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}

/// Read-only catalog index over all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<String, Category>,
}

impl Catalog {
    /// Creates an empty catalog. Every term resolves to the unknown sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from categories, keeping their order.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if two categories share a name
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Result<Self, CatalogError> {
        let mut index = IndexMap::new();
        for category in categories {
            if index.contains_key(category.name()) {
                return Err(CatalogError::invalid_category(
                    category.name(),
                    "duplicate category name",
                ));
            }
            index.insert(category.name().to_string(), category);
        }
        Ok(Self { categories: index })
    }

    /// Builds a catalog from a parsed document.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let categories = document
            .into_iter()
            .map(|(name, record)| Category::new(name, record.shelf, record.items))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// Iterates categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Looks up a category by exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.values().map(|c| c.items.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Category;
    type IntoIter = indexmap::map::Values<'a, String, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.values()
    }
}
