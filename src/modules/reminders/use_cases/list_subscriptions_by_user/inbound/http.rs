use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListSubscriptionsParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListSubscriptionsParams>,
) -> impl IntoResponse {
    match state.list_subscriptions.handle(&params.user_id).await {
        Ok(subscriptions) => Json(subscriptions).into_response(),
        Err(e) => error_response(&e),
    }
}
