use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mp_webhook::config::{Config, SecurityHeadersLayer};
use mp_webhook::gateway::MercadoPagoClient;
use mp_webhook::routes::create_routes;
use mp_webhook::state::AppState;
use mp_webhook::store::PgTransactionStore;
use mp_webhook::utils::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Successfully connected to database");

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Migrations run successfully");

    let gateway = MercadoPagoClient::from_config(&config)?;
    tracing::info!(base_url = %config.api_base_url, "Payment gateway client ready");

    let state = AppState::new(
        Arc::new(PgTransactionStore::new(pool)),
        Arc::new(gateway),
    );
    let app = create_routes(state, SecurityHeadersLayer::from_config(&config));

    let addr = config.bind_addr();
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
