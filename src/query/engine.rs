use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::MenuError;
use crate::models::{MenuItem, Stats, UiState};
use crate::query::calculations::compute_stats;
use crate::query::constants::{ALL_CATEGORY, FILTER_CACHE_CAPACITY};
use crate::query::filter::filter_indices;

/// Which items the dashboard statistics are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsScope {
    /// The whole catalog, regardless of the active filters.
    #[default]
    Catalog,
    /// Only the items that pass the active filters.
    Filtered,
}

impl FromStr for StatsScope {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" | "all" => Ok(StatsScope::Catalog),
            "filtered" => Ok(StatsScope::Filtered),
            other => Err(MenuError::InvalidInput(format!(
                "Unknown stats scope '{}' (expected 'catalog' or 'filtered')",
                other
            ))),
        }
    }
}

impl fmt::Display for StatsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsScope::Catalog => write!(f, "catalog"),
            StatsScope::Filtered => write!(f, "filtered"),
        }
    }
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
    pub state: UiState,
    pub categories: &'a [String],
    pub items: Vec<&'a MenuItem>,
    pub stats: Stats,
    #[serde(rename = "statsScope")]
    pub stats_scope: StatsScope,
}

impl DashboardView<'_> {
    /// True when the filters matched nothing and the empty state should be shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters and aggregates a catalog for the current view state.
///
/// Filter results are memoized per `UiState`. The catalog never changes, so
/// entries are only dropped when the cache reaches its capacity.
pub struct QueryEngine<'a> {
    catalog: &'a Catalog,
    stats_scope: StatsScope,
    catalog_stats: Stats,
    cache: HashMap<UiState, Vec<usize>>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_scope(catalog, StatsScope::default())
    }

    pub fn with_scope(catalog: &'a Catalog, stats_scope: StatsScope) -> Self {
        Self {
            catalog,
            stats_scope,
            catalog_stats: compute_stats(catalog.items()),
            cache: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn stats_scope(&self) -> StatsScope {
        self.stats_scope
    }

    /// Category labels with the sentinel first.
    pub fn categories(&self) -> &'a [String] {
        let catalog: &'a Catalog = self.catalog;
        catalog.categories()
    }

    /// Items matching the state, in catalog order.
    pub fn filter(&mut self, state: &UiState) -> Vec<&'a MenuItem> {
        let catalog: &'a Catalog = self.catalog;
        let items = catalog.items();

        if let Some(indices) = self.cache.get(state) {
            debug!(
                category = %state.active_category,
                search = %state.search_query,
                "filter cache hit"
            );
            return indices.iter().map(|&i| &items[i]).collect();
        }

        if state.active_category != ALL_CATEGORY
            && !catalog.has_category(&state.active_category)
        {
            warn!(category = %state.active_category, "unknown category selected");
        }

        let indices = filter_indices(items, state);
        debug!(
            category = %state.active_category,
            search = %state.search_query,
            matched = indices.len(),
            "filter recomputed"
        );

        if self.cache.len() >= FILTER_CACHE_CAPACITY {
            self.cache.clear();
        }
        let result = indices.iter().map(|&i| &items[i]).collect();
        self.cache.insert(state.clone(), indices);
        result
    }

    /// Statistics over the full catalog.
    pub fn catalog_stats(&self) -> &Stats {
        &self.catalog_stats
    }

    /// Statistics for the state under the engine's scope.
    pub fn stats(&mut self, state: &UiState) -> Stats {
        match self.stats_scope {
            StatsScope::Catalog => self.catalog_stats.clone(),
            StatsScope::Filtered => compute_stats(self.filter(state)),
        }
    }

    /// Categories, filtered items and stats in one pass.
    pub fn view(&mut self, state: &UiState) -> DashboardView<'a> {
        let items = self.filter(state);
        let stats = match self.stats_scope {
            StatsScope::Catalog => self.catalog_stats.clone(),
            StatsScope::Filtered => compute_stats(items.iter().copied()),
        };

        DashboardView {
            state: state.clone(),
            categories: self.categories(),
            items,
            stats,
            stats_scope: self.stats_scope,
        }
    }

    /// Number of memoized filter results.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
