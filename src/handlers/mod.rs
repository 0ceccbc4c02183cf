use axum::http::Uri;
use axum::{response::IntoResponse, response::Response};
use serde::Serialize;

use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod listing;
pub mod webhook;

pub use listing::list_transactions;
pub use webhook::mercadopago_webhook;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "mp-webhook",
    };

    success(payload, "Health check successful").into_response()
}

pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for '{}'", uri.path())).into_response()
}
