use crate::models::{MenuItem, Stats};
use crate::query::calculations::price_change;
use crate::query::constants::CURRENCY_SUFFIX;
use crate::query::{DashboardView, StatsScope};

/// Price without trailing decimals when it is a whole number.
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Price change with an explicit `+` for increases.
pub fn format_signed_price(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_price(value))
    } else {
        format_price(value)
    }
}

/// Percentage text with a leading `+` unless it is already negative.
pub fn format_signed_percent(percent: &str) -> String {
    if percent.starts_with('-') {
        format!("{}%", percent)
    } else {
        format!("+{}%", percent)
    }
}

/// Category tabs on one line; the active one is bracketed.
pub fn format_category_tabs(categories: &[String], active: &str) -> String {
    categories
        .iter()
        .map(|c| {
            if c == active {
                format!("[{}]", c)
            } else {
                c.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One item card as a single aligned line.
pub fn format_item_row(item: &MenuItem, name_width: usize) -> String {
    let change = price_change(item);
    let tag = if change.is_high_impact {
        "  HIGH GROWTH"
    } else {
        ""
    };

    format!(
        "{:>3}. {:<12} {:<width$}  было {:>6}  стало {:>6} {}  | {} {} ({}){}",
        item.id,
        item.category,
        item.name,
        format_price(item.old_price),
        format_price(item.new_price),
        CURRENCY_SUFFIX,
        format_signed_price(change.diff),
        CURRENCY_SUFFIX,
        format_signed_percent(&change.percent),
        tag,
        width = name_width
    )
}

/// The four dashboard cards.
pub fn format_stats(stats: &Stats) -> Vec<String> {
    vec![
        format!(
            "Средний рост:       {}",
            format_signed_percent(&stats.avg_growth_percent)
        ),
        format!(
            "Прибыль / блюдо:    {} {}",
            format_signed_price(stats.avg_growth_rub as f64),
            CURRENCY_SUFFIX
        ),
        format!("Позиций в меню:     {}", stats.total_items),
        format!(
            "Эффект на выручку:  {} {}",
            format_signed_price(stats.total_revenue_impact),
            CURRENCY_SUFFIX
        ),
    ]
}

/// Print the header with category tabs and the search text.
pub fn display_header(view: &DashboardView<'_>) {
    println!();
    println!("TBILISO · Menu Strategy 2026");
    println!("{}", format_category_tabs(view.categories, &view.state.active_category));
    if !view.state.search_query.is_empty() {
        println!("Поиск: \"{}\"", view.state.search_query);
    }
    println!();
}

/// Print the statistics block.
pub fn display_stats(stats: &Stats, scope: StatsScope) {
    let title = match scope {
        StatsScope::Catalog => "=== Стратегия (всё меню) ===",
        StatsScope::Filtered => "=== Стратегия (текущая выборка) ===",
    };
    println!("{}", title);
    for line in format_stats(stats) {
        println!("  {}", line);
    }
    println!();
}

/// Print item cards in order.
pub fn display_items(items: &[&MenuItem]) {
    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for item in items {
        println!("{}", format_item_row(item, name_width));
    }
    println!();
}

/// Print the no-results block with optional name suggestions.
pub fn display_empty_state(suggestions: &[String]) {
    println!("Блюда не найдены");
    if !suggestions.is_empty() {
        println!("Возможно, вы искали: {}", suggestions.join(", "));
    }
    println!("Сбросить фильтры: выберите категорию \"All\" и очистите поиск.");
    println!();
}

/// Print a full dashboard frame.
pub fn display_dashboard(view: &DashboardView<'_>, suggestions: &[String]) {
    display_header(view);
    display_stats(&view.stats, view.stats_scope);

    if view.is_empty() {
        display_empty_state(suggestions);
    } else {
        display_items(&view.items);
    }
}

/// Print the category list, one per line.
pub fn display_categories(categories: &[String]) {
    for (i, category) in categories.iter().enumerate() {
        println!("{:>3}. {}", i, category);
    }
}
