//! Prize Catalog — category definitions and winner caps

use serde::{Deserialize, Serialize};

/// Prize catalog configuration
///
/// Adding or retiring a tier is a data change; draw logic reads caps and
/// labels from here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeCatalog {
    /// Category definitions, in draw-priority order
    pub categories: Vec<PrizeCategory>,
}

impl PrizeCatalog {
    /// Standard Lucky Jewels promotion catalog
    pub fn standard() -> Self {
        Self {
            categories: vec![
                PrizeCategory::new("grand", "Diamond Ring", "$5,000", "#FFD700", 1),
                PrizeCategory::new("second", "Gold Necklace", "$3,000", "#C0C0C0", 1),
                PrizeCategory::new("third", "Silver Bracelet", "$1,500", "#CD7F32", 1),
                PrizeCategory::new(
                    "consolation",
                    "Shopping Voucher & Pearl Earrings",
                    "$500",
                    "#4CAF50",
                    10,
                ),
            ],
        }
    }

    /// Look up a category by key
    pub fn category(&self, key: &str) -> Option<&PrizeCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Sum of winner caps across all categories
    pub fn total_prizes(&self) -> u32 {
        self.categories.iter().map(|c| c.max_winners).sum()
    }

    /// All category keys in order
    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }
}

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single prize category definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeCategory {
    /// Stable key (e.g., "grand", "consolation")
    pub key: String,

    /// Prize name shown to participants
    pub name: String,

    /// Display value (e.g., "$5,000")
    pub display_value: String,

    /// Accent color for presentation (hex)
    pub color: String,

    /// Maximum winners drawn in this category
    pub max_winners: u32,
}

impl PrizeCategory {
    /// Create a new category
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        display_value: impl Into<String>,
        color: impl Into<String>,
        max_winners: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            display_value: display_value.into(),
            color: color.into(),
            max_winners,
        }
    }

    /// Composed prize label, e.g. "Diamond Ring ($5,000)"
    pub fn prize_label(&self) -> String {
        format!("{} ({})", self.name, self.display_value)
    }
}
