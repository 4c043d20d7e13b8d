mod item;
mod state;
mod stats;

pub use item::{MenuItem, PriceChange};
pub use state::UiState;
pub use stats::Stats;
