use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use product_inventory::api::{routes, state::AppState};
use product_inventory::application::use_cases::ProductUseCases;
use product_inventory::infrastructure::config::ConfigManager;
use product_inventory::infrastructure::database_connection::DatabaseConnection;
use product_inventory::infrastructure::logging::init_logging;
use product_inventory::infrastructure::product_repository::SqliteProductRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigManager::new()?.load_config().await?;
    init_logging(&config.logging)?;

    let db = DatabaseConnection::new(&config.database)
        .await
        .with_context(|| format!("Failed to open database: {}", config.database.url))?;
    db.migrate().await.context("Failed to run migrations")?;

    let repository = Arc::new(SqliteProductRepository::new(Arc::new(db.pool().clone())));
    let products = Arc::new(ProductUseCases::new(repository));
    let state = AppState::new(products, config.server.base_url());

    let app = routes::router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("product inventory service listening on {addr}");
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
