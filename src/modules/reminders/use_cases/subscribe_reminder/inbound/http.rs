use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reminders::core::subscription::ReminderType;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

fn active_by_default() -> bool {
    true
}

#[derive(Deserialize)]
pub struct SubscribeReminderBody {
    pub user_id: String,
    pub reminder_type: ReminderType,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubscribeReminderBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .subscribe_reminder
        .handle(&body.user_id, body.reminder_type, body.is_active)
        .await
    {
        Ok(subscribed) if subscribed.created => {
            (StatusCode::CREATED, Json(subscribed.subscription)).into_response()
        }
        Ok(subscribed) => Json(subscribed.subscription).into_response(),
        Err(e) => error_response(&e),
    }
}
