use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteTaskParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Query(params): Query<DeleteTaskParams>,
) -> impl IntoResponse {
    match state.delete_task.handle(&params.user_id, &task_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}
