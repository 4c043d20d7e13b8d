mod data;
mod persistence;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{MenuError, Result};
use crate::models::MenuItem;
use crate::query::constants::ALL_CATEGORY;

pub use data::builtin_items;
pub use persistence::{load_items, save_items};

/// The immutable, ordered list of menu items shown by the dashboard.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    /// Sentinel followed by unique categories in first-seen order.
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut ids = HashSet::new();
        for item in &items {
            if !ids.insert(item.id) {
                return Err(MenuError::DuplicateId(item.id));
            }
        }

        let categories = derive_categories(&items);
        debug!(
            items = items.len(),
            categories = categories.len() - 1,
            "catalog built"
        );

        Ok(Self { items, categories })
    }

    /// The embedded restaurant menu.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_items())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories[1..].iter().any(|c| c == category)
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Unique categories in first-occurrence order, with the sentinel prepended.
pub fn derive_categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![ALL_CATEGORY.to_string()];

    for item in items {
        if seen.insert(item.category.as_str()) {
            categories.push(item.category.clone());
        }
    }

    categories
}
