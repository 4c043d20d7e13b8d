pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_csv;
pub use prompts::{prompt_action, prompt_category, prompt_search, prompt_yes_no, BrowseAction};
pub use render::{display_categories, display_dashboard, display_stats};
