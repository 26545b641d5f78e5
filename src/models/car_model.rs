use serde::{Deserialize, Serialize};

use super::{Category, Purpose};

/// Identifier of a car model
pub type ModelId = i64;

/// Highest score a single review can give one category
pub const REVIEW_SCORE_MAX: i64 = 3;

/// A car model together with the running review aggregates collected for it.
///
/// The sums and counters are maintained by the review write path. Ranking and
/// recommendation only read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    pub description: String,
    #[serde(rename = "informationURL", alias = "informationUrl")]
    pub information_url: String,
    /// Price in units of 10,000 KRW
    pub price: i32,
    /// Seating capacity
    pub people: i32,

    #[serde(default)]
    pub mpg_sum: i64,
    #[serde(default)]
    pub safe_sum: i64,
    #[serde(default)]
    pub space_sum: i64,
    #[serde(default)]
    pub design_sum: i64,
    #[serde(default)]
    pub fun_sum: i64,

    #[serde(default)]
    pub work_count: i64,
    #[serde(default)]
    pub drive_count: i64,
    #[serde(default)]
    pub long_count: i64,
    #[serde(default)]
    pub kids_count: i64,
    #[serde(default)]
    pub travel_count: i64,

    #[serde(default)]
    pub review_count: i64,
}

impl Model {
    /// Running review sum for one category
    pub fn category_sum(&self, category: Category) -> i64 {
        match category {
            Category::Mileage => self.mpg_sum,
            Category::Safety => self.safe_sum,
            Category::Space => self.space_sum,
            Category::Design => self.design_sum,
            Category::Fun => self.fun_sum,
        }
    }

    /// Number of reviews that declared this purpose
    pub fn purpose_count(&self, purpose: Purpose) -> i64 {
        match purpose {
            Purpose::Commute => self.work_count,
            Purpose::LongDistance => self.long_count,
            Purpose::Drive => self.drive_count,
            Purpose::WeekendTrip => self.travel_count,
            Purpose::Family => self.kids_count,
        }
    }

    fn has_reviews(&self) -> bool {
        self.review_count > 0
    }

    /// Average review score for a category, `0.0` for an unreviewed model
    pub fn keyword_average(&self, category: Category) -> f64 {
        if !self.has_reviews() {
            return 0.0;
        }
        self.category_sum(category) as f64 / self.review_count as f64
    }

    /// Mean of the five category averages
    pub fn all_keyword_average(&self) -> f64 {
        let total: f64 = Category::ALL
            .iter()
            .map(|category| self.keyword_average(*category))
            .sum();
        total / Category::ALL.len() as f64
    }

    /// Share of reviews declaring `purpose`, as a percentage
    pub fn purpose_percent(&self, purpose: Purpose) -> f64 {
        if !self.has_reviews() {
            return 0.0;
        }
        self.purpose_count(purpose) as f64 * 100.0 / self.review_count as f64
    }

    /// Category average as a percentage of the best possible review score
    pub fn priority_percent(&self, category: Category) -> f64 {
        if !self.has_reviews() {
            return 0.0;
        }
        self.category_sum(category) as f64 * 100.0 / (self.review_count * REVIEW_SCORE_MAX) as f64
    }

    /// Category with the highest average. Ties keep the earlier category.
    pub fn best_priority(&self) -> Category {
        first_max_by_score(&Category::ALL, |category| self.keyword_average(*category))
    }

    /// Purpose with the highest share. Ties keep the earlier purpose.
    pub fn best_purpose(&self) -> Purpose {
        first_max_by_score(&Purpose::ALL, |purpose| self.purpose_percent(*purpose))
    }
}

/// Returns the first candidate with the maximal score.
///
/// `Iterator::max_by` keeps the last of equal elements, so this folds by hand.
fn first_max_by_score<T: Copy>(candidates: &[T; 5], score: impl Fn(&T) -> f64) -> T {
    let mut best = candidates[0];
    let mut best_score = score(&best);
    for candidate in &candidates[1..] {
        let candidate_score = score(candidate);
        if candidate_score > best_score {
            best = *candidate;
            best_score = candidate_score;
        }
    }
    best
}
