use crate::models::{MenuItem, PriceChange, Stats};
use crate::query::constants::*;

/// Running price sums over a set of items.
///
/// Partial totals over disjoint slices can be merged, so the reduction does
/// not depend on how the items are partitioned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceTotals {
    pub total_old: f64,
    pub total_new: f64,
    pub count: usize,
}

impl PriceTotals {
    pub fn add(mut self, item: &MenuItem) -> Self {
        self.total_old += item.old_price;
        self.total_new += item.new_price;
        self.count += 1;
        self
    }

    pub fn merge(self, other: PriceTotals) -> Self {
        Self {
            total_old: self.total_old + other.total_old,
            total_new: self.total_new + other.total_new,
            count: self.count + other.count,
        }
    }

    /// Total new minus total old.
    #[inline]
    pub fn diff(&self) -> f64 {
        self.total_new - self.total_old
    }

    pub fn into_stats(self) -> Stats {
        let diff = self.diff();

        // Empty input: report zero rather than a NaN mean.
        let avg_growth_rub = if self.count > 0 {
            round_half_up(diff / self.count as f64)
        } else {
            0
        };

        Stats {
            avg_growth_rub,
            avg_growth_percent: format_growth_percent(diff, self.total_old),
            total_items: self.count,
            total_revenue_impact: diff,
        }
    }
}

/// Sum prices over any sequence of items.
pub fn sum_prices<'a, I>(items: I) -> PriceTotals
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items.into_iter().fold(PriceTotals::default(), PriceTotals::add)
}

/// Aggregate statistics over a sequence of items.
pub fn compute_stats<'a, I>(items: I) -> Stats
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    sum_prices(items).into_stats()
}

/// Per-item card values: absolute change, formatted percentage, high-impact flag.
pub fn price_change(item: &MenuItem) -> PriceChange {
    let diff = item.diff();
    let tenths = growth_percent_tenths(diff, item.old_price);

    let percent = match tenths {
        Some(t) => format_tenths(t),
        None => ZERO_PERCENT.to_string(),
    };

    // Classified on the displayed (rounded) value, not the raw ratio.
    let is_high_impact = tenths
        .map(|t| t as f64 / 10.0 > HIGH_IMPACT_PERCENT)
        .unwrap_or(false);

    PriceChange {
        diff,
        percent,
        is_high_impact,
    }
}

/// Growth of `delta` relative to `base` in tenths of a percent.
///
/// Returns `None` when `base` is not positive.
pub fn growth_percent_tenths(delta: f64, base: f64) -> Option<i64> {
    if base > 0.0 {
        Some(round_tenths(delta / base * 100.0))
    } else {
        None
    }
}

/// Growth percentage as display text: one decimal, or `"0"` for a non-positive base.
pub fn format_growth_percent(delta: f64, base: f64) -> String {
    match growth_percent_tenths(delta, base) {
        Some(t) => format_tenths(t),
        None => ZERO_PERCENT.to_string(),
    }
}

/// Round to the nearest integer with halves going up (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Signed number of tenths, rounding the magnitude half away from zero.
pub fn round_tenths(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let tenths = (value.abs() * 10.0).round() as i64;
    if value < 0.0 { -tenths } else { tenths }
}

/// Render a tenths count with exactly one decimal (`163 -> "16.3"`).
pub fn format_tenths(tenths: i64) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    format!("{}{}.{}", sign, magnitude / 10, magnitude % 10)
}

/// One-decimal rendering of an arbitrary value.
pub fn format_one_decimal(value: f64) -> String {
    format_tenths(round_tenths(value))
}
