use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    db::ModelRepository,
    error::AppResult,
    models::{Category, Model, PriceRange, RankingQuery},
};

/// Orders models by review relevance within a price window.
///
/// Models outside `range` are dropped. The rest are ordered by the keyword
/// average (or the mean of all category averages when `keyword` is `None`),
/// then by review count, then by name. Equal names fall back to id so the
/// result never depends on input order.
pub fn rank(models: &[Model], keyword: Option<Category>, range: PriceRange) -> Vec<Model> {
    let score = |model: &Model| match keyword {
        Some(category) => model.keyword_average(category),
        None => model.all_keyword_average(),
    };

    let mut ranked: Vec<(f64, &Model)> = models
        .iter()
        .filter(|m| range.contains(m.price))
        .map(|m| (score(m), m))
        .collect();

    ranked.sort_by(|(score_a, a), (score_b, b)| compare_ranked(*score_a, a, *score_b, b));

    ranked.into_iter().map(|(_, m)| m.clone()).collect()
}

fn compare_ranked(score_a: f64, a: &Model, score_b: f64, b: &Model) -> Ordering {
    score_b
        .total_cmp(&score_a)
        .then_with(|| b.review_count.cmp(&a.review_count))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Fetches the models in the requested price window and ranks them
pub async fn rank_models(
    repository: Arc<dyn ModelRepository>,
    query: RankingQuery,
) -> AppResult<Vec<Model>> {
    let keyword = query
        .keyword
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .map(str::parse::<Category>)
        .transpose()?;
    let range = PriceRange::from_bounds(query.min_price, query.max_price);

    let models = repository
        .find_models_by_price_range(range.min, range.max)
        .await?;

    tracing::debug!(
        repository = repository.name(),
        candidates = models.len(),
        keyword = ?keyword,
        min_price = range.min,
        max_price = range.max,
        "Ranking models"
    );

    Ok(rank(&models, keyword, range))
}
