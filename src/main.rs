use anyhow::Context;
use car_api_rust::{
    app,
    config::Config,
    constants::API_NAME,
    repository::CarRepository,
    service::CarService,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Car API server on port {}", API_NAME, config.server_port);

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    let repository = CarRepository::new(pool, config.collection.clone())
        .context("Failed to initialize car repository")?;
    repository
        .ensure_collection()
        .await
        .context("Failed to prepare car collection")?;

    tracing::info!("{} Using collection '{}'", API_NAME, repository.collection());

    let service = CarService::new(Arc::new(repository));
    let app = app::build_router(service, app::cors_layer(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
