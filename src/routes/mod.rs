use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::SecurityHeadersLayer;
use crate::handlers::{health_check, list_transactions, mercadopago_webhook, not_found};
use crate::state::AppState;

pub const WEBHOOK_PATH: &str = "/webhook-mercadopago";

pub fn create_routes(state: AppState, security_headers: SecurityHeadersLayer) -> Router {
    Router::new()
        .route("/", get(list_transactions))
        .route(WEBHOOK_PATH, post(mercadopago_webhook))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(security_headers)
}
