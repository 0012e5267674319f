use migration::MigratorTrait;
use sea_orm::Database;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config;
use crate::task::web::{TaskState, create_task_router};

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: config::Config) -> anyhow::Result<()> {
    use axum::Router;

    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let db = Database::connect(&config.db_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let task_state = TaskState { db: Arc::new(db) };
    let task_router = create_task_router(task_state);

    let app = Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(task_router)
        .layer(TraceLayer::new_for_http());

    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_ok() {
        assert_eq!(health_check_handler().await, "OK");
    }
}
