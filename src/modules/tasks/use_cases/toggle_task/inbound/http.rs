use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ToggleTaskBody {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Result<Json<ToggleTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.toggle_task.handle(&body.user_id, &task_id).await {
        Ok(task) => Json(task).into_response(),
        Err(e) => error_response(&e),
    }
}
