use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

/// Actions offered by the interactive browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    ChooseCategory,
    Search,
    ResetFilters,
    Quit,
}

impl BrowseAction {
    const ALL: [BrowseAction; 4] = [
        BrowseAction::ChooseCategory,
        BrowseAction::Search,
        BrowseAction::ResetFilters,
        BrowseAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::ChooseCategory => "Выбрать категорию",
            BrowseAction::Search => "Поиск блюд",
            BrowseAction::ResetFilters => "Сбросить фильтры",
            BrowseAction::Quit => "Выход",
        }
    }
}

/// Prompt for the next browser action.
pub fn prompt_action() -> Result<BrowseAction> {
    let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Что дальше?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(BrowseAction::ALL
        .get(selection)
        .copied()
        .unwrap_or(BrowseAction::Quit))
}

/// Prompt for a category, starting on the active one.
pub fn prompt_category(categories: &[String], active: &str) -> Result<String> {
    let default = categories.iter().position(|c| c == active).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Категория")
        .items(categories)
        .default(default)
        .interact()?;

    Ok(categories
        .get(selection)
        .cloned()
        .unwrap_or_else(|| active.to_string()))
}

/// Prompt for search text; empty input clears the search.
pub fn prompt_search(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Поиск блюд...")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
