use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::services::notifications::{log_result, process_notification};
use crate::state::AppState;
use crate::utils::response::acknowledgment;

/// Always acknowledges with 200 so the gateway never retries; outcomes and
/// failures only reach the logs.
pub async fn mercadopago_webhook(State(state): State<AppState>, body: Bytes) -> Response {
    let result = process_notification(&body, state.gateway.as_ref(), state.store.as_ref()).await;
    log_result(&result);

    acknowledgment().into_response()
}
