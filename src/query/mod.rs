pub mod calculations;
pub mod constants;
pub mod engine;
pub mod filter;

pub use calculations::{
    compute_stats, format_growth_percent, format_one_decimal, price_change, round_half_up,
    sum_prices, PriceTotals,
};
pub use constants::*;
pub use engine::{DashboardView, QueryEngine, StatsScope};
pub use filter::{filter_indices, filter_items, matches_category, matches_search, suggest_names};
