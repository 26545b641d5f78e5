use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Model, ModelId, RankingQuery, RecommendBody, RecommendationRequest, RecommendedModel},
    services::{ranking, recommendation},
};

use super::AppState;

/// Message returned in place of a detail URL for unknown ids
pub const MODEL_NOT_FOUND_MESSAGE: &str = "No model found for the given id.";

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranks models by review keyword score within a price range
pub async fn get_ranking(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RankingQuery>,
) -> AppResult<Json<Vec<Model>>> {
    tracing::info!(
        request_id = %request_id,
        keyword = ?query.keyword,
        min_price = ?query.min_price,
        max_price = ?query.max_price,
        "Processing ranking request"
    );

    let ranked = ranking::rank_models(state.repository.clone(), query).await?;

    tracing::info!(request_id = %request_id, count = ranked.len(), "Ranking completed");

    Ok(Json(ranked))
}

/// Returns the detail page URL of a model, or a not-found message
pub async fn get_information_url(
    State(state): State<AppState>,
    Path(model_id): Path<ModelId>,
) -> AppResult<String> {
    let url = recommendation::information_url(state.repository.clone(), model_id).await?;

    Ok(url.unwrap_or_else(|| {
        tracing::debug!(model_id, "Detail URL requested for unknown model");
        MODEL_NOT_FOUND_MESSAGE.to_string()
    }))
}

/// Recommends the two models that best fit the buyer's constraints
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<RecommendBody>,
) -> AppResult<Json<[RecommendedModel; 2]>> {
    let request = RecommendationRequest::try_from(body)?;

    tracing::info!(request_id = %request_id, "Processing recommendation request");

    let picks = recommendation::recommend_models(state.repository.clone(), request).await?;

    Ok(Json(picks))
}
