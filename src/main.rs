use std::path::Path;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use menu_strategy_rs::catalog::{load_items, Catalog};
use menu_strategy_rs::cli::{Cli, Command, QueryArgs};
use menu_strategy_rs::error::Result;
use menu_strategy_rs::interface::{
    display_categories, display_dashboard, display_stats, prompt_action, prompt_category,
    prompt_search, prompt_yes_no, write_csv, BrowseAction,
};
use menu_strategy_rs::models::UiState;
use menu_strategy_rs::query::{suggest_names, QueryEngine, StatsScope, SUGGESTION_LIMIT};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = open_catalog(cli.file.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Dashboard { query, json } => cmd_dashboard(&catalog, &query, json),
        Command::Categories => {
            display_categories(catalog.categories());
            Ok(())
        }
        Command::Stats { query } => cmd_stats(&catalog, &query),
        Command::Export { query, output } => cmd_export(&catalog, &query, &output),
        Command::Browse { stats_scope } => cmd_browse(&catalog, stats_scope),
    }
}

/// Load the catalog from a file, or fall back to the built-in menu.
fn open_catalog(file: Option<&Path>) -> Result<Catalog> {
    let catalog = match file {
        Some(path) => {
            info!(path = %path.display(), "loading menu");
            Catalog::new(load_items(path)?)?
        }
        None => Catalog::builtin()?,
    };
    info!(items = catalog.len(), "catalog ready");
    Ok(catalog)
}

/// Render one dashboard frame for the given filters.
fn cmd_dashboard(catalog: &Catalog, query: &QueryArgs, json: bool) -> Result<()> {
    let mut engine = QueryEngine::with_scope(catalog, query.stats_scope);
    let state = query.state();
    let view = engine.view(&state);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let suggestions = empty_state_suggestions(catalog, &state, view.is_empty());
    display_dashboard(&view, &suggestions);
    Ok(())
}

/// Print statistics for the given filters.
fn cmd_stats(catalog: &Catalog, query: &QueryArgs) -> Result<()> {
    let mut engine = QueryEngine::with_scope(catalog, query.stats_scope);
    let stats = engine.stats(&query.state());
    display_stats(&stats, query.stats_scope);
    Ok(())
}

/// Write the filtered items to CSV.
fn cmd_export(catalog: &Catalog, query: &QueryArgs, output: &Path) -> Result<()> {
    let mut engine = QueryEngine::new(catalog);
    let items = engine.filter(&query.state());

    write_csv(&items, output)?;
    println!("Exported {} items to {}", items.len(), output.display());
    Ok(())
}

/// Interactive loop: each action updates the view state and redraws.
fn cmd_browse(catalog: &Catalog, stats_scope: StatsScope) -> Result<()> {
    let mut engine = QueryEngine::with_scope(catalog, stats_scope);
    let mut state = UiState::default();

    loop {
        let view = engine.view(&state);
        let empty = view.is_empty();
        let suggestions = empty_state_suggestions(catalog, &state, empty);
        display_dashboard(&view, &suggestions);

        if empty && prompt_yes_no("Сбросить фильтры?", true)? {
            state = UiState::reset();
            continue;
        }

        state = match prompt_action()? {
            BrowseAction::ChooseCategory => {
                let category = prompt_category(engine.categories(), &state.active_category)?;
                state.with_category(&category)
            }
            BrowseAction::Search => {
                let search = prompt_search(&state.search_query)?;
                state.with_search(&search)
            }
            BrowseAction::ResetFilters => UiState::reset(),
            BrowseAction::Quit => break,
        };
    }

    Ok(())
}

fn empty_state_suggestions(catalog: &Catalog, state: &UiState, empty: bool) -> Vec<String> {
    if !empty || state.search_query.is_empty() {
        return Vec::new();
    }
    suggest_names(catalog.items(), &state.search_query, SUGGESTION_LIMIT)
}
