/// Synthetic category label meaning "no category filter applied".
pub const ALL_CATEGORY: &str = "All";

/// Percentage growth above which an item is flagged as high impact.
pub const HIGH_IMPACT_PERCENT: f64 = 12.0;

/// Text reported for a growth percentage whose base price total is not positive.
pub const ZERO_PERCENT: &str = "0";

// ─────────────────────────────────────────────────────────────────────────────
// Query cache
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum number of memoized filter results kept by a query engine.
pub const FILTER_CACHE_CAPACITY: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Empty-state suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
pub const SUGGESTION_MIN_SCORE: f64 = 0.7;

/// Maximum number of suggestions offered in the empty state.
pub const SUGGESTION_LIMIT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Currency suffix appended to prices.
pub const CURRENCY_SUFFIX: &str = "₽";
