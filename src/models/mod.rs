pub mod car_model;
pub mod keyword;
pub mod recommendation;

use serde::Deserialize;

pub use car_model::{Model, ModelId, REVIEW_SCORE_MAX};
pub use keyword::{Category, Purpose};
pub use recommendation::{RecommendBody, RecommendationRequest, RecommendedModel};

/// Query string of the ranking endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQuery {
    /// Category label to rank by. Ranks by all categories when absent.
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub min_price: Option<i32>,
    #[serde(default)]
    pub max_price: Option<i32>,
}

/// Inclusive price window used by the ranking endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i32,
    pub max: i32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: i32::MAX,
        }
    }
}

impl PriceRange {
    /// Builds a window from optional bounds, defaulting to `0..=i32::MAX`
    pub fn from_bounds(min: Option<i32>, max: Option<i32>) -> Self {
        let default = Self::default();
        Self {
            min: min.unwrap_or(default.min),
            max: max.unwrap_or(default.max),
        }
    }

    pub fn contains(&self, price: i32) -> bool {
        self.min <= price && price <= self.max
    }
}
