use serde::Serialize;

/// Aggregate growth figures over a set of menu items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Mean per-item price change, rounded to a whole ruble.
    #[serde(rename = "avgGrowthRub")]
    pub avg_growth_rub: i64,

    /// Aggregate growth percentage, already formatted to one decimal.
    #[serde(rename = "avgGrowthPercent")]
    pub avg_growth_percent: String,

    #[serde(rename = "totalItems")]
    pub total_items: usize,

    /// Sum of per-item price changes.
    #[serde(rename = "totalRevenueImpact")]
    pub total_revenue_impact: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            avg_growth_rub: 0,
            avg_growth_percent: "0".to_string(),
            total_items: 0,
            total_revenue_impact: 0.0,
        }
    }
}
