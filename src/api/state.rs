use std::sync::Arc;

use crate::db::{InMemoryModelRepository, ModelRepository};
use crate::models::Model;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ModelRepository>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State backed by an empty in-memory catalog
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryModelRepository::new()))
    }

    pub fn with_repository(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    /// State backed by an in-memory catalog holding `models`
    pub fn with_models(models: impl IntoIterator<Item = Model>) -> Self {
        Self::with_repository(Arc::new(InMemoryModelRepository::with_models(models)))
    }
}
