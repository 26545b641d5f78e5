use std::collections::BTreeMap;
use std::path::Path;

use tokio::sync::RwLock;

use crate::{
    db::ModelRepository,
    error::{AppError, AppResult},
    models::{Model, ModelId},
};

/// Model catalog held in process memory
///
/// Keyed by a `BTreeMap` so listings come back ordered by id, matching the
/// Postgres repository.
#[derive(Default)]
pub struct InMemoryModelRepository {
    models: RwLock<BTreeMap<ModelId, Model>>,
}

impl InMemoryModelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `models`. Later duplicates of an id win.
    pub fn with_models(models: impl IntoIterator<Item = Model>) -> Self {
        let models = models.into_iter().map(|m| (m.id, m)).collect();
        Self {
            models: RwLock::new(models),
        }
    }

    /// Loads a JSON array of models from disk
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Config(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;
        let models: Vec<Model> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("Invalid seed file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            models = models.len(),
            "Loaded model seed file"
        );

        Ok(Self::with_models(models))
    }
}

#[async_trait::async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn find_models_by_price_range(&self, min: i32, max: i32) -> AppResult<Vec<Model>> {
        let models = self.models.read().await;
        Ok(models
            .values()
            .filter(|m| min <= m.price && m.price <= max)
            .cloned()
            .collect())
    }

    async fn find_model_by_id(&self, id: ModelId) -> AppResult<Option<Model>> {
        Ok(self.models.read().await.get(&id).cloned())
    }

    async fn find_all_models(&self) -> AppResult<Vec<Model>> {
        Ok(self.models.read().await.values().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
