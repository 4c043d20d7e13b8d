use serde::{Deserialize, Serialize};

/// A single priced dish with its previous and current price.
///
/// Prices are taken as-is; negative or zero values are not rejected and simply
/// flow through the growth arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "id")]
    pub id: u32,

    #[serde(rename = "category")]
    pub category: String,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "oldPrice")]
    pub old_price: f64,

    #[serde(rename = "newPrice")]
    pub new_price: f64,
}

impl MenuItem {
    pub fn new(id: u32, category: &str, name: &str, old_price: f64, new_price: f64) -> Self {
        Self {
            id,
            category: category.to_string(),
            name: name.to_string(),
            old_price,
            new_price,
        }
    }

    /// Absolute price change (new - old).
    #[inline]
    pub fn diff(&self) -> f64 {
        self.new_price - self.old_price
    }

    /// Lowercased name used for search matching.
    pub fn search_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Per-item values shown on an item card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChange {
    pub diff: f64,

    /// Percentage growth formatted to one decimal, or `"0"` when the old price is not positive.
    pub percent: String,

    pub is_high_impact: bool,
}
