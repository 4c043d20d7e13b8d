pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod query;

pub use catalog::Catalog;
pub use error::{MenuError, Result};
pub use models::{MenuItem, PriceChange, Stats, UiState};
pub use query::{DashboardView, QueryEngine, StatsScope};
