use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::ModelRepository,
    error::AppResult,
    models::{Model, ModelId},
};

const MODEL_COLUMNS: &str = "id, name, description, information_url, price, people, \
     mpg_sum, safe_sum, space_sum, design_sum, fun_sum, \
     work_count, drive_count, long_count, kids_count, travel_count, review_count";

/// Creates a PostgreSQL connection pool and applies pending migrations
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Model catalog backed by the `model` table
#[derive(Clone)]
pub struct PgModelRepository {
    pool: PgPool,
}

impl PgModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ModelRepository for PgModelRepository {
    async fn find_models_by_price_range(&self, min: i32, max: i32) -> AppResult<Vec<Model>> {
        let query = format!(
            "SELECT {} FROM model WHERE price BETWEEN $1 AND $2 ORDER BY id",
            MODEL_COLUMNS
        );
        let models = sqlx::query_as::<_, Model>(&query)
            .bind(min)
            .bind(max)
            .fetch_all(&self.pool)
            .await?;
        Ok(models)
    }

    async fn find_model_by_id(&self, id: ModelId) -> AppResult<Option<Model>> {
        let query = format!("SELECT {} FROM model WHERE id = $1", MODEL_COLUMNS);
        let model = sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(model)
    }

    async fn find_all_models(&self) -> AppResult<Vec<Model>> {
        let query = format!("SELECT {} FROM model ORDER BY id", MODEL_COLUMNS);
        let models = sqlx::query_as::<_, Model>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(models)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
