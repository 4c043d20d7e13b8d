use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::UiState;
use crate::query::constants::ALL_CATEGORY;
use crate::query::StatsScope;

/// Menu Strategy — price-change dashboard for a restaurant menu.
#[derive(Parser, Debug)]
#[command(name = "menu_strategy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with menu items; the built-in menu is used when omitted.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Category, search, and stats scope shared by the query commands.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Category to show ("All" for every category).
    #[arg(short, long, default_value = ALL_CATEGORY)]
    pub category: String,

    /// Case-insensitive dish name search.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Compute statistics over the whole catalog or only the filtered items.
    #[arg(long, default_value = "catalog")]
    pub stats_scope: StatsScope,
}

impl QueryArgs {
    pub fn state(&self) -> UiState {
        UiState::new(&self.category, &self.search)
    }
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: String::new(),
            stats_scope: StatsScope::default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the dashboard: categories, statistics, and matching dishes.
    Dashboard {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the dashboard as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List menu categories.
    Categories,

    /// Show statistics only.
    Stats {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Export matching dishes with their price changes to CSV.
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Output CSV path.
        #[arg(short, long, default_value = "menu_prices.csv")]
        output: PathBuf,
    },

    /// Browse the menu interactively.
    Browse {
        #[arg(long, default_value = "catalog")]
        stats_scope: StatsScope,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard {
            query: QueryArgs::default(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["menu_strategy"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Dashboard { json: false, .. }
        ));
    }

    #[test]
    fn test_dashboard_args() {
        let cli = Cli::try_parse_from([
            "menu_strategy",
            "dashboard",
            "--category",
            "Супы",
            "--search",
            "харчо",
            "--stats-scope",
            "filtered",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Dashboard { query, json }) => {
                assert!(json);
                assert_eq!(query.state(), UiState::new("Супы", "харчо"));
                assert_eq!(query.stats_scope, StatsScope::Filtered);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_stats_scope_rejected() {
        let result = Cli::try_parse_from(["menu_strategy", "stats", "--stats-scope", "weekly"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_file_flag() {
        let cli = Cli::try_parse_from(["menu_strategy", "categories", "--file", "menu.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("menu.json")));
    }
}
