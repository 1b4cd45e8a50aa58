use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRecipientBody {
    pub user_id: String,
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterRecipientBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .register_recipient
        .handle(&body.user_id, body.email)
        .await
    {
        Ok(recipient) => Json(recipient).into_response(),
        Err(e) => error_response(&e),
    }
}
