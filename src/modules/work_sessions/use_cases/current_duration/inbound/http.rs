use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CurrentDurationParams {
    pub user_id: String,
}

#[derive(Serialize)]
pub struct CurrentDurationResponse {
    pub user_id: String,
    pub hours: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<CurrentDurationParams>,
) -> impl IntoResponse {
    match state.current_duration.handle(&params.user_id).await {
        Ok(hours) => Json(CurrentDurationResponse {
            user_id: params.user_id,
            hours,
        })
        .into_response(),
        Err(e) => error_response(&e),
    }
}
