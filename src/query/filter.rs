use strsim::jaro_winkler;

use crate::models::{MenuItem, UiState};
use crate::query::constants::{ALL_CATEGORY, SUGGESTION_MIN_SCORE};

/// Check whether an item passes the category selector.
pub fn matches_category(item: &MenuItem, active_category: &str) -> bool {
    active_category == ALL_CATEGORY || item.category == active_category
}

/// Check whether an item's name contains the search text, case-insensitively.
///
/// `query_lower` must already be lowercased.
pub fn matches_search(item: &MenuItem, query_lower: &str) -> bool {
    query_lower.is_empty() || item.search_key().contains(query_lower)
}

/// Items matching both the category selector and the search text, in catalog order.
pub fn filter_items<'a>(items: &'a [MenuItem], state: &UiState) -> Vec<&'a MenuItem> {
    let query = state.search_query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_category(item, &state.active_category))
        .filter(|item| matches_search(item, &query))
        .collect()
}

/// Positions of matching items within `items`.
pub fn filter_indices(items: &[MenuItem], state: &UiState) -> Vec<usize> {
    let query = state.search_query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_category(item, &state.active_category))
        .filter(|(_, item)| matches_search(item, &query))
        .map(|(i, _)| i)
        .collect()
}

/// Names that look like the search text, best match first.
///
/// Used to offer "did you mean" hints when a search comes back empty.
pub fn suggest_names(items: &[MenuItem], query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(&MenuItem, f64)> = items
        .iter()
        .map(|item| (item, jaro_winkler(&item.search_key(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_MIN_SCORE)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut names: Vec<String> = Vec::new();
    for (item, _) in candidates {
        if !names.contains(&item.name) {
            names.push(item.name.clone());
        }
        if names.len() == limit {
            break;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "Supa", "Borscht", 100.0, 120.0),
            MenuItem::new(2, "Main", "Khachapuri", 300.0, 345.0),
            MenuItem::new(3, "Main", "Khinkali", 250.0, 280.0),
        ]
    }

    #[test]
    fn test_filter_all_empty_search_returns_everything() {
        let items = sample_items();
        let result = filter_items(&items, &UiState::default());
        let ids: Vec<u32> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_category_is_exact() {
        let items = sample_items();
        let result = filter_items(&items, &UiState::new("main", ""));
        assert!(result.is_empty());

        let result = filter_items(&items, &UiState::new("Main", ""));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_search_case_insensitive() {
        let items = sample_items();
        let result = filter_items(&items, &UiState::new(ALL_CATEGORY, "KH"));
        let ids: Vec<u32> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_filter_indices_agree_with_items() {
        let items = sample_items();
        let state = UiState::new("Main", "ali");
        let indices = filter_indices(&items, &state);
        let by_index: Vec<&MenuItem> = indices.iter().map(|&i| &items[i]).collect();
        assert_eq!(by_index, filter_items(&items, &state));
    }

    #[test]
    fn test_suggest_names() {
        let items = sample_items();
        let suggestions = suggest_names(&items, "khachapury", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Khachapuri"));

        assert!(suggest_names(&items, "zzzzzz", 3).is_empty());
        assert!(suggest_names(&items, "", 3).is_empty());
    }
}
