use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::views::transactions::render_transactions_page;

pub async fn list_transactions(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let transactions = state.store.list_newest_first().await?;
    Ok(Html(render_transactions_page(&transactions)))
}
