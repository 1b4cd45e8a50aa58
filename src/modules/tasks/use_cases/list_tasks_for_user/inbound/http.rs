use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTasksParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> impl IntoResponse {
    match state.list_tasks.handle(&params.user_id).await {
        Ok(tasks) => Json(tasks).into_response(),
        Err(e) => error_response(&e),
    }
}
