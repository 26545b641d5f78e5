use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    db::ModelRepository,
    error::{AppError, AppResult},
    models::{
        Category, Model, ModelId, Purpose, RecommendationRequest, RecommendedModel,
        REVIEW_SCORE_MAX,
    },
};

/// Budget ceiling assumed when the buyer leaves it open
pub const DEFAULT_MAX_BUDGET: i32 = 6000;

/// Per-request scores derived from a model's review aggregates.
///
/// All values use integer arithmetic. Lower `price_score` and `people_score`
/// mean a closer fit, but the ordering below sorts both descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreProjection {
    pub price_score: i64,
    pub people_score: i64,
    /// Category sums over `review_count * REVIEW_SCORE_MAX`, indexed like `Category::ALL`
    category_scores: [i64; 5],
    /// Purpose counters as whole percentages, indexed like `Purpose::ALL`
    purpose_percents: [i64; 5],
}

impl ScoreProjection {
    /// Scores `model` against the buyer's budget midpoint and party size
    pub fn new(model: &Model, budget_midpoint: i64, party_size: i64) -> Self {
        let reviews = model.review_count;

        Self {
            price_score: ((i64::from(model.price) - budget_midpoint) / 100 / 5).abs(),
            people_score: (i64::from(model.people) - party_size).abs(),
            category_scores: Category::ALL
                .map(|c| per_review(model.category_sum(c), 1, reviews * REVIEW_SCORE_MAX)),
            purpose_percents: Purpose::ALL
                .map(|p| per_review(model.purpose_count(p), 100, reviews)),
        }
    }

    pub fn category_score(&self, category: Category) -> i64 {
        self.category_scores[category as usize]
    }

    pub fn purpose_percent(&self, purpose: Purpose) -> i64 {
        self.purpose_percents[purpose as usize]
    }

    /// Combined score of the buyer's two priorities
    pub fn priority_score(&self, first: Category, second: Category) -> i64 {
        self.category_score(first) + self.category_score(second)
    }
}

/// `value * scale / divisor` in integer arithmetic, 0 for unreviewed models.
///
/// Aggregates are non-negative, so one division by `review_count * REVIEW_SCORE_MAX`
/// truncates the same way as dividing by each factor in turn.
fn per_review(value: i64, scale: i64, divisor: i64) -> i64 {
    if divisor > 0 {
        value * scale / divisor
    } else {
        0
    }
}

/// Midpoint of the buyer's budget, with open bounds defaulted
pub fn budget_midpoint(request: &RecommendationRequest) -> i64 {
    let min = i64::from(request.min_price.unwrap_or(0));
    let max = i64::from(request.max_price.unwrap_or(DEFAULT_MAX_BUDGET));
    (min + max) / 2
}

/// Builds the score table for one request
pub fn project_scores(
    models: &[Model],
    request: &RecommendationRequest,
) -> HashMap<ModelId, ScoreProjection> {
    let midpoint = budget_midpoint(request);
    let party_size = request.party_size();

    models
        .iter()
        .map(|m| (m.id, ScoreProjection::new(m, midpoint, party_size)))
        .collect()
}

/// Recommendation order for two projected models.
///
/// Keys, all descending: purpose share, combined priority score, people score,
/// price score. Id ascending settles anything left.
///
/// The people and price keys rank the worst fit first. This is the observable
/// order of the legacy service and is kept for compatibility even though it
/// looks like an inverted comparison there.
fn compare_projections(
    request: &RecommendationRequest,
    (id_a, a): (ModelId, &ScoreProjection),
    (id_b, b): (ModelId, &ScoreProjection),
) -> Ordering {
    b.purpose_percent(request.purpose)
        .cmp(&a.purpose_percent(request.purpose))
        .then_with(|| {
            b.priority_score(request.priority1, request.priority2)
                .cmp(&a.priority_score(request.priority1, request.priority2))
        })
        .then_with(|| b.people_score.cmp(&a.people_score))
        .then_with(|| b.price_score.cmp(&a.price_score))
        .then_with(|| id_a.cmp(&id_b))
}

/// Orders every model id for `request`, best candidate first
pub fn recommendation_order(models: &[Model], request: &RecommendationRequest) -> Vec<ModelId> {
    let projections = project_scores(models, request);

    let mut ranked: Vec<(ModelId, &ScoreProjection)> =
        projections.iter().map(|(id, p)| (*id, p)).collect();
    ranked.sort_by(|a, b| compare_projections(request, *a, *b));

    ranked.into_iter().map(|(id, _)| id).collect()
}

/// Picks the two models that best fit `request`.
///
/// `models` is only read. Scores live in a table built for this call, and the
/// returned entries are annotated from the untouched records.
pub fn recommend(
    models: &[Model],
    request: &RecommendationRequest,
) -> AppResult<[RecommendedModel; 2]> {
    if models.len() < 2 {
        return Err(AppError::InvalidRequest(format!(
            "At least 2 models are required for a recommendation, found {}",
            models.len()
        )));
    }

    let by_id: HashMap<ModelId, &Model> = models.iter().map(|m| (m.id, m)).collect();
    let order = recommendation_order(models, request);

    let pick = |rank: usize| -> AppResult<RecommendedModel> {
        order
            .get(rank)
            .and_then(|id| by_id.get(id))
            .map(|m| RecommendedModel::from(*m))
            .ok_or_else(|| {
                AppError::InvalidRequest(
                    "At least 2 distinct models are required for a recommendation".to_string(),
                )
            })
    };

    Ok([pick(0)?, pick(1)?])
}

/// Fetches the full catalog and recommends two models
pub async fn recommend_models(
    repository: Arc<dyn ModelRepository>,
    request: RecommendationRequest,
) -> AppResult<[RecommendedModel; 2]> {
    let models = repository.find_all_models().await?;

    tracing::info!(
        repository = repository.name(),
        candidates = models.len(),
        party_size = request.party_size(),
        priority1 = %request.priority1,
        priority2 = %request.priority2,
        purpose = %request.purpose,
        "Scoring models for recommendation"
    );

    let picks = recommend(&models, &request)?;

    tracing::info!(
        first = picks[0].id,
        second = picks[1].id,
        "Recommendation selected"
    );

    Ok(picks)
}

/// Detail page of a model, if it exists
pub async fn information_url(
    repository: Arc<dyn ModelRepository>,
    id: ModelId,
) -> AppResult<Option<String>> {
    Ok(repository
        .find_model_by_id(id)
        .await?
        .map(|m| m.information_url))
}
