use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndSessionBody {
    pub user_id: String,
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EndSessionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.end_session.handle(&body.user_id, body.notes).await {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => error_response(&e),
    }
}
