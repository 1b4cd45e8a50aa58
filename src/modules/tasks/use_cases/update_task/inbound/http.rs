use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tasks::use_cases::create_task::inbound::http::TaskDetailsBody;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub user_id: String,
    #[serde(flatten)]
    pub details: TaskDetailsBody,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .update_task
        .handle(&body.user_id, &task_id, body.details.into())
        .await
    {
        Ok(task) => Json(task).into_response(),
        Err(e) => error_response(&e),
    }
}
