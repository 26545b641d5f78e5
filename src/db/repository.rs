use crate::{
    error::AppResult,
    models::{Model, ModelId},
};

/// Read access to the car model catalog
///
/// Ranking and recommendation fetch a fresh snapshot through this trait on
/// every request and never write back.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ModelRepository: Send + Sync {
    /// Models priced within `min..=max`, ordered by id
    async fn find_models_by_price_range(&self, min: i32, max: i32) -> AppResult<Vec<Model>>;

    /// Looks up a single model
    async fn find_model_by_id(&self, id: ModelId) -> AppResult<Option<Model>>;

    /// Every model in the catalog, ordered by id
    async fn find_all_models(&self) -> AppResult<Vec<Model>>;

    /// Repository name for logging
    fn name(&self) -> &'static str;
}
