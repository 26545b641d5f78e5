use std::sync::Arc;

use car_pick_api::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, InMemoryModelRepository, ModelRepository, PgModelRepository},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("car_pick_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let repository = build_repository(&config).await?;
    tracing::info!(repository = repository.name(), "Model repository ready");

    let app = create_router(AppState::with_repository(repository));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks Postgres when a database URL is configured, memory otherwise
async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn ModelRepository>> {
    if let Some(database_url) = &config.database_url {
        let pool = create_pool(database_url).await?;
        return Ok(Arc::new(PgModelRepository::new(pool)));
    }

    let repository = match &config.seed_path {
        Some(path) => InMemoryModelRepository::from_json_file(path).await?,
        None => {
            tracing::warn!("No DATABASE_URL or SEED_PATH set, serving an empty catalog");
            InMemoryModelRepository::new()
        }
    };

    Ok(Arc::new(repository))
}
