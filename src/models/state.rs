use serde::Serialize;

use crate::query::constants::ALL_CATEGORY;

/// The two pieces of view state that drive a query.
///
/// Any category and any search text form a valid combination, including ones
/// that match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UiState {
    #[serde(rename = "activeCategory")]
    pub active_category: String,

    #[serde(rename = "searchQuery")]
    pub search_query: String,
}

impl UiState {
    pub fn new(active_category: &str, search_query: &str) -> Self {
        Self {
            active_category: active_category.to_string(),
            search_query: search_query.to_string(),
        }
    }

    pub fn with_category(&self, category: &str) -> Self {
        Self {
            active_category: category.to_string(),
            search_query: self.search_query.clone(),
        }
    }

    pub fn with_search(&self, query: &str) -> Self {
        Self {
            active_category: self.active_category.clone(),
            search_query: query.to_string(),
        }
    }

    /// Clear both filters: sentinel category, empty search.
    pub fn reset() -> Self {
        Self::default()
    }

    /// True when no filter is applied.
    pub fn is_unfiltered(&self) -> bool {
        self.active_category == ALL_CATEGORY && self.search_query.is_empty()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ALL_CATEGORY, "")
    }
}
